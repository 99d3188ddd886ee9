//! # Marquee
//!
//! Venue-name normalization and near-duplicate grouping for event listings.
//!
//! Event organizers type venue names free-hand, so the same physical venue
//! shows up under several spellings ("The Hult Center", "hult center",
//! "Hult centre"). Marquee normalizes those raw names, clusters
//! near-duplicates with a greedy edit-distance pass, and exposes one
//! canonical representative per cluster plus a reverse lookup from a
//! canonical name back to every raw variant.
//!
//! ## Features
//!
//! - Pure, deterministic functions; no state carried between calls
//! - Fixed edit-distance threshold with first-match-wins clustering
//! - Canonical list and reverse lookup for filter UIs
//! - Small CLI for running the same operations over files of venue names

pub mod canonical;
pub mod cli;
pub mod error;
pub mod levenshtein;
pub mod normalize;

pub mod prelude {
    pub use crate::canonical::{
        SIMILARITY_THRESHOLD, VenueGroup, canonical_venues, group_similar_venues,
        venues_for_canonical,
    };
    pub use crate::levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
    pub use crate::normalize::normalize;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
