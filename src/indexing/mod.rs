//! Search index - the corpus flattened into one record per question and
//! per expansion subitem.
//!
//! URL conventions shared with the site templates:
//! - question page: `/pregunta/<number>.html`
//! - subitem anchor: `/pregunta/<number>.html#grupo-<1-based group index>`

mod search;

pub use search::{build_search_index, group_url, question_url};
