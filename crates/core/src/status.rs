//! Delivery post status ordering and display helpers.
//!
//! A post moves through a fixed, totally ordered set of states:
//! `Open < Requested < Accepted < Completed`. The enum replaces the
//! free-form status strings on the wire; unknown strings are rejected at
//! the parse boundary instead of being compared defensively everywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a delivery post.
///
/// The derived `Ord` follows the lifecycle: `Open` is the earliest state,
/// `Completed` the last. Nothing in this crate prevents a backward
/// transition; enforcement is the server's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    Open,
    Requested,
    Accepted,
    Completed,
}

/// Visual tier of a status label relative to the post's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    /// The label is the current status.
    Current,
    /// The label lies at or before the current status in the ordering.
    Reached,
    /// The label lies after the current status, or the current status is
    /// unknown.
    Unreached,
}

impl PostStatus {
    /// All statuses in lifecycle order, for rendering progress tracks.
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Open,
        PostStatus::Requested,
        PostStatus::Accepted,
        PostStatus::Completed,
    ];

    /// Wire representation (capitalized, as the service stores it).
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Open => "Open",
            PostStatus::Requested => "Requested",
            PostStatus::Accepted => "Accepted",
            PostStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(PostStatus::Open),
            "Requested" => Ok(PostStatus::Requested),
            "Accepted" => Ok(PostStatus::Accepted),
            "Completed" => Ok(PostStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown post status '{other}'"
            ))),
        }
    }
}

/// Returns `true` if `label` has been reached given the `current` status,
/// i.e. `label <= current` in the lifecycle ordering.
pub fn reached(label: PostStatus, current: PostStatus) -> bool {
    label <= current
}

/// Classify a status label relative to the current status for display.
pub fn tier(label: PostStatus, current: PostStatus) -> StatusTier {
    if label == current {
        StatusTier::Current
    } else if label < current {
        StatusTier::Reached
    } else {
        StatusTier::Unreached
    }
}

/// String-boundary variant of [`reached`].
///
/// When the current status string does not parse, every label is treated
/// as unreached rather than erroring: a post with a status this client
/// does not know about shows an empty progress track.
pub fn reached_from_str(label: PostStatus, current: &str) -> bool {
    current
        .parse::<PostStatus>()
        .is_ok_and(|current| reached(label, current))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_lifecycle() {
        assert!(PostStatus::Open < PostStatus::Requested);
        assert!(PostStatus::Requested < PostStatus::Accepted);
        assert!(PostStatus::Accepted < PostStatus::Completed);
    }

    #[test]
    fn reached_matches_index_comparison() {
        for (i, label) in PostStatus::ALL.iter().enumerate() {
            for (j, current) in PostStatus::ALL.iter().enumerate() {
                assert_eq!(
                    reached(*label, *current),
                    i <= j,
                    "reached({label}, {current})"
                );
            }
        }
    }

    #[test]
    fn tier_distinguishes_current_from_reached() {
        assert_eq!(
            tier(PostStatus::Accepted, PostStatus::Accepted),
            StatusTier::Current
        );
        assert_eq!(
            tier(PostStatus::Open, PostStatus::Accepted),
            StatusTier::Reached
        );
        assert_eq!(
            tier(PostStatus::Completed, PostStatus::Accepted),
            StatusTier::Unreached
        );
    }

    #[test]
    fn unknown_current_status_means_nothing_is_reached() {
        for label in PostStatus::ALL {
            assert!(!reached_from_str(label, "Archived"));
            assert!(!reached_from_str(label, ""));
        }
    }

    #[test]
    fn known_current_status_string_parses_and_compares() {
        assert!(reached_from_str(PostStatus::Open, "Completed"));
        assert!(reached_from_str(PostStatus::Completed, "Completed"));
        assert!(!reached_from_str(PostStatus::Completed, "Open"));
    }

    #[test]
    fn round_trips_through_strings() {
        for status in PostStatus::ALL {
            assert_eq!(status.as_str().parse::<PostStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_string_is_a_validation_error() {
        let err = "Pending".parse::<PostStatus>().unwrap_err();
        assert!(err.to_string().contains("Pending"));
    }

    #[test]
    fn serializes_as_capitalized_string() {
        let json = serde_json::to_string(&PostStatus::Requested).unwrap();
        assert_eq!(json, "\"Requested\"");
        let back: PostStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PostStatus::Requested);
    }
}
