use async_trait::async_trait;
use serde_json::Value;

use crate::clients::errors::Result;

/// Artist lookup by search term.
///
/// Implementations return the raw artist record for the best match, or an
/// empty JSON object when nothing matched. Transport and HTTP status failures
/// are errors; a missing match is not.
#[async_trait]
pub trait ArtistLookup {
    /// Look up the artist best matching `search_term`
    async fn lookup_artist(&self, search_term: &str) -> Result<Value>;
}
