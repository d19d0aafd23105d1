use crate::models::{AttendeeProfile, CrowdProfile};

/// Per-person consumption weights for each demographic class.
///
/// Passed explicitly into the estimator so alternative sets can be supplied
/// without touching global state.
#[derive(Debug, Clone, Copy)]
pub struct ConsumptionCoefficients {
    pub male: f64,
    pub female: f64,
    pub child: f64,
}

impl Default for ConsumptionCoefficients {
    fn default() -> Self {
        Self {
            male: 1.0,
            female: 0.85,
            child: 0.5,
        }
    }
}

impl ConsumptionCoefficients {
    /// Coefficient set for a crowd profile.
    ///
    /// No rural survey figures exist yet, so both profiles map to the
    /// standard set.
    pub fn for_profile(_profile: CrowdProfile) -> Self {
        Self::default()
    }
}

/// Weighted head count: the total expected consumption of an attendee mix.
///
/// `male*w_m + female*w_f + child*w_c`, exact, no rounding.
pub fn estimate_capacity(attendees: &AttendeeProfile, coeffs: &ConsumptionCoefficients) -> f64 {
    attendees.male as f64 * coeffs.male
        + attendees.female as f64 * coeffs.female
        + attendees.child as f64 * coeffs.child
}
