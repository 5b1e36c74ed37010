use serde::{Deserialize, Serialize};

/// One output row per search term. Fields are `None` when upstream had no match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// The term as given by the caller
    pub search_term: String,
    /// Artist display name
    pub artist_name: Option<String>,
    /// Genius artist id
    pub artist_id: Option<u64>,
    /// Number of Genius followers
    pub followers_count: Option<u64>,
}

impl ResultRow {
    /// Row with every artist field absent
    pub fn empty(search_term: impl Into<String>) -> Self {
        ResultRow {
            search_term: search_term.into(),
            artist_name: None,
            artist_id: None,
            followers_count: None,
        }
    }
}
