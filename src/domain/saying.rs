//! Wise-saying record type

use serde::{Deserialize, Serialize};

/// A quote/author pair with a unique integer id.
///
/// The id is assigned by the store and never changes; updates replace the
/// content and author in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiseSaying {
    pub id: i64,
    pub content: String,
    pub author: String,
}

impl WiseSaying {
    pub fn new(id: i64, content: String, author: String) -> Self {
        WiseSaying {
            id,
            content,
            author,
        }
    }
}
