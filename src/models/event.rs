use serde::{Deserialize, Serialize};

use super::EventId;

/// Head counts for the three demographic classes an event caters to.
///
/// Counts are unsigned by construction, so negative attendance cannot reach
/// the capacity estimator; bad numeric input is rejected where it is parsed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttendeeProfile {
    pub male: u32,
    pub female: u32,
    pub child: u32,
}

impl AttendeeProfile {
    pub fn new(male: u32, female: u32, child: u32) -> Self {
        Self {
            male,
            female,
            child,
        }
    }

    /// Total head count regardless of class.
    pub fn total(&self) -> u32 {
        self.male + self.female + self.child
    }
}

/// Crowd profile of an event venue.
///
/// Stored and displayed; coefficient sets are keyed off it, though no
/// separate rural figures exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrowdProfile {
    #[default]
    Urban,
    Rural,
}

impl std::fmt::Display for CrowdProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrowdProfile::Urban => write!(f, "Urban"),
            CrowdProfile::Rural => write!(f, "Rural"),
        }
    }
}

/// A catering event with its expected attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,

    /// Event date as an ISO-8601 string; not interpreted by the planner.
    pub date: String,

    pub venue: String,
    pub attendees: AttendeeProfile,

    #[serde(default)]
    pub profile: CrowdProfile,
}
