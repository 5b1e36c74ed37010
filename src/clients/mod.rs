/// Data entities for result rows
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Genius API client
pub mod genius;
/// Artist lookup capability
pub mod lookup;

pub use entities::ResultRow;
pub use errors::{Error, Result};
pub use genius::{GeniusClient, GeniusClientBuilder};
pub use lookup::ArtistLookup;
