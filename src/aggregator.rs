use log::debug;
use serde_json::Value;

use crate::clients::{ArtistLookup, ResultRow, errors::Result};

/// Turn a raw artist record into a row. Each field is read on its own, so a
/// record missing only `followers_count` still yields name and id.
pub fn row_from_artist(search_term: &str, artist_data: &Value) -> ResultRow {
    let Some(artist) = artist_data.pointer("/response/artist").filter(|a| a.is_object()) else {
        return ResultRow::empty(search_term);
    };

    ResultRow {
        search_term: search_term.to_string(),
        artist_name: artist.get("name").and_then(Value::as_str).map(str::to_string),
        artist_id: artist.get("id").and_then(Value::as_u64),
        followers_count: artist.get("followers_count").and_then(Value::as_u64),
    }
}

/// Runs an [`ArtistLookup`] over a batch of search terms
pub struct Aggregator<L> {
    lookup: L,
}

impl<L: ArtistLookup> Aggregator<L> {
    /// Wrap a lookup implementation
    pub fn new(lookup: L) -> Self {
        Aggregator { lookup }
    }

    /// Look up every term in order and return one row per term.
    ///
    /// Terms without a match produce rows with absent fields. The first
    /// lookup error aborts the batch and is returned; remaining terms are
    /// not looked up.
    pub async fn lookup_many<S: AsRef<str>>(&self, search_terms: &[S]) -> Result<Vec<ResultRow>> {
        let mut rows = Vec::with_capacity(search_terms.len());

        for term in search_terms {
            let term = term.as_ref();
            let artist_data = self.lookup.lookup_artist(term).await?;
            let row = row_from_artist(term, &artist_data);
            debug!("{term:?} -> {:?}", row.artist_name);
            rows.push(row);
        }

        Ok(rows)
    }

    /// The wrapped lookup
    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
