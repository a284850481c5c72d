//! Document Assembler
//!
//! Turns a validated panel request into a rendered document. Each panel kind
//! lives in its own module with a request type and a `build` function that
//! merges the request over the kind's registry defaults. [`render`] then
//! serializes the document and derives its identifier.

pub mod document;
pub mod renderer;
pub mod row;
pub mod stat;
pub mod timeseries;

pub use document::{hashcode, render, RenderedPanel};
pub use renderer::{PanelKind, PanelRenderer, PanelRequest};
pub use row::RowRequest;
pub use stat::StatRequest;
pub use timeseries::TimeseriesRequest;
