//! Rgenius - Look up artists on Genius
//!
//! This library searches the Genius API for artist names and collects the
//! best match for each search term into rows that can be exported as CSV or JSON.

/// Batch lookup of search terms into result rows
pub mod aggregator;
/// Client modules for interacting with the Genius API
pub mod clients;
/// CSV and JSON export of result rows
pub mod export;

pub use aggregator::Aggregator;
pub use clients::{ArtistLookup, Error, GeniusClient, ResultRow, Result};
pub use export::Format;
