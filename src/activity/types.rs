/// Core activity type definitions
/// 
/// Defines activities and the registry mapping as they appear in the JSON snapshot.
/// These types are serialized/deserialized verbatim, so field names are the wire format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full registry mapping: activity name -> activity record
/// 
/// Ordered by name so that every snapshot write is deterministic.
pub type ActivityMap = BTreeMap<String, Activity>;

/// A single enrollable activity
/// 
/// The name is the map key, not a field. Description and schedule are opaque
/// to the registry and only carried through to listings and the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Free-form schedule text (e.g., "Fridays, 3:30 PM - 5:00 PM")
    #[serde(default)]
    pub schedule: String,
    /// Roster capacity; None means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    /// Enrolled participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether the participant is already on the roster
    pub fn is_enrolled(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    /// Whether the roster has reached capacity
    pub fn is_full(&self) -> bool {
        match self.max_participants {
            Some(max) => self.participants.len() >= max as usize,
            None => false,
        }
    }

    /// Free slots left, or None for unlimited activities
    pub fn spots_left(&self) -> Option<usize> {
        self.max_participants
            .map(|max| (max as usize).saturating_sub(self.participants.len()))
    }

    /// Whether a roster holds the same email more than once
    pub(crate) fn has_duplicates(&self) -> bool {
        self.participants
            .iter()
            .enumerate()
            .any(|(i, p)| self.participants[..i].contains(p))
    }
}

/// Result of a successful enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollOutcome {
    pub activity: String,
    pub participant: String,
}

impl EnrollOutcome {
    /// Confirmation message shown to the caller
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.participant, self.activity)
    }
}

/// Result of a successful withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithdrawOutcome {
    pub activity: String,
    pub participant: String,
}

impl WithdrawOutcome {
    /// Confirmation message shown to the caller
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.participant, self.activity)
    }
}
