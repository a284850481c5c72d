//! Identifier derivation

use gdash::panel::{hashcode, PanelRenderer, RowRequest};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_hashcode_is_non_negative_and_deterministic(bytes in any::<Vec<u8>>()) {
        let id = hashcode(&bytes);
        prop_assert!(id >= 0);
        prop_assert_eq!(id, hashcode(&bytes));
        prop_assert!(id <= i64::from(u32::MAX));
    }

    #[test]
    fn prop_rendered_id_matches_document(title in "[A-Za-z0-9 ]{0,32}") {
        let rendered = PanelRenderer::default().row(&RowRequest::new(title)).unwrap();
        prop_assert_eq!(rendered.id, hashcode(rendered.json.as_bytes()).to_string());
    }
}
