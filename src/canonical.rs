//! Greedy grouping of near-duplicate venue names.
//!
//! A single pass over the input assigns each raw name to the first existing
//! group whose representative is within [`SIMILARITY_THRESHOLD`] edits of it
//! (comparing normalized keys), or founds a new group. First-match-wins is the
//! contract: a name within threshold of two groups' representatives lands in
//! whichever group was created earlier, and that is what the filter UI shows.
//! Groups are recomputed on every call from the current venue list; nothing is
//! cached or persisted, so identical input always yields identical groups.

use serde::{Deserialize, Serialize};

use crate::levenshtein::levenshtein_distance_threshold;
use crate::normalize::normalize;

/// Maximum edit distance between normalized keys for two venue names to be
/// considered the same venue. Fixed, not configurable per call.
pub const SIMILARITY_THRESHOLD: usize = 2;

/// A cluster of raw venue names considered the same physical venue.
///
/// Members are kept in insertion order; the first member is the canonical
/// representative shown in deduplicated lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueGroup {
    members: Vec<String>,
}

impl VenueGroup {
    fn founded_by(raw: &str) -> Self {
        VenueGroup {
            members: vec![raw.to_string()],
        }
    }

    /// The canonical representative: the first venue name inserted.
    pub fn representative(&self) -> &str {
        // Groups are only ever created with a founding member.
        &self.members[0]
    }

    /// All raw spellings in this group, in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether `raw` is a member of this group (exact string match).
    pub fn contains(&self, raw: &str) -> bool {
        self.members.iter().any(|m| m == raw)
    }

    /// Number of raw spellings in this group.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition venue names into groups of near-duplicates.
///
/// Input order is significant: it decides which spelling becomes each group's
/// representative and which of two equally close groups a name joins. Every
/// input name ends up in exactly one group, and the returned groups are in
/// creation order.
pub fn group_similar_venues<S: AsRef<str>>(venues: &[S]) -> Vec<VenueGroup> {
    let mut groups: Vec<VenueGroup> = Vec::new();
    // Normalized key of each group's representative, indexed like `groups`.
    let mut rep_keys: Vec<String> = Vec::new();

    for venue in venues {
        let venue = venue.as_ref();
        let key = normalize(venue);

        let matched = rep_keys.iter().position(|rep_key| {
            levenshtein_distance_threshold(&key, rep_key, SIMILARITY_THRESHOLD).is_some()
        });

        match matched {
            Some(index) => groups[index].members.push(venue.to_string()),
            None => {
                groups.push(VenueGroup::founded_by(venue));
                rep_keys.push(key);
            }
        }
    }

    groups
}

/// The canonical representative of each group, in group-creation order.
///
/// This is the deduplicated list a filter checklist renders.
pub fn canonical_venues<S: AsRef<str>>(venues: &[S]) -> Vec<String> {
    group_similar_venues(venues)
        .iter()
        .map(|group| group.representative().to_string())
        .collect()
}

/// All raw spellings grouped with `canonical`, looked up by any member of the
/// group, not just its representative.
///
/// Used to translate a user's canonical selection back into the full set of
/// raw strings to filter events by. If `canonical` appears in no group (it was
/// computed from some other venue list), this degrades to returning just
/// `canonical` itself rather than signaling an error.
pub fn venues_for_canonical<S: AsRef<str>>(venues: &[S], canonical: &str) -> Vec<String> {
    group_similar_venues(venues)
        .into_iter()
        .find(|group| group.contains(canonical))
        .map(|group| group.members)
        .unwrap_or_else(|| vec![canonical.to_string()])
}
