//! Terminal rendering of a statistics report.
//!
//! The JSON artifacts are the product; this is the human-facing view printed
//! by `catecismo --summary`.

mod colors;
mod summary;

pub use colors::{testament_label, testament_style, Colorizer};
pub use summary::SummaryRenderer;
