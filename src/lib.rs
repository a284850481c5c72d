//! gdash: Grafana Panel Configuration
//!
//! Translates declarative panel requests into Grafana dashboard-API panel
//! JSON. Builtin defaults, provider-level settings and per-request override
//! blocks are layered into one effective configuration, serialized
//! canonically, and tagged with a CRC-32 identifier derived from the bytes.
//!
//! ```
//! use gdash::panel::{PanelRenderer, PanelRequest, RowRequest};
//!
//! let renderer = PanelRenderer::default();
//! let rendered = renderer.render(&PanelRequest::Row(RowRequest::new("Overview"))).unwrap();
//! assert!(rendered.json.contains("\"type\": \"row\""));
//! ```

pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod grafana;
pub mod logging;
pub mod merge;
pub mod options;
pub mod panel;
pub mod translate;

pub use defaults::Defaults;
pub use error::PanelError;
pub use panel::{PanelRenderer, PanelRequest, RenderedPanel};
