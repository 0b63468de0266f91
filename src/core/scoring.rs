use serde::{Deserialize, Serialize};
use crate::models::{LocationPreference, PartnerPreference, Profile, ScoringWeights};

/// Points deducted per year a candidate falls outside the preferred age range
const AGE_PENALTY_PER_YEAR: u32 = 2;

/// Points awarded per criterion, plus the denominator they were scored against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age: u32,
    pub height: u32,
    pub religion: u32,
    pub caste: u32,
    pub education: u32,
    pub occupation: u32,
    pub location: u32,
    pub marital_status: u32,
    pub possible: u32,
}

impl ScoreBreakdown {
    /// Sum of the per-criterion points, saturating at `u32::MAX`
    pub fn earned(&self) -> u32 {
        [
            self.height,
            self.religion,
            self.caste,
            self.education,
            self.occupation,
            self.location,
            self.marital_status,
        ]
        .into_iter()
        .fold(self.age, u32::saturating_add)
    }

    /// Rounded percentage in [0, 100]
    pub fn percentage(&self) -> u8 {
        if self.possible == 0 {
            return 0;
        }
        let pct = (f64::from(self.earned()) / f64::from(self.possible) * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }
}

/// Calculate a compatibility percentage (0-100) for a candidate
///
/// Scoring formula (default weights):
/// score = age (20) + height (10) + religion (15) + caste (10)
///       + education (15) + occupation (10) + location (15) + marital status (5)
///
/// An empty preference list grants full credit for its criterion. A candidate
/// field that is absent earns nothing for its criterion. The requester profile
/// is part of the contract but no criterion currently reads it.
pub fn calculate_match_score(
    requester: &Profile,
    candidate: &Profile,
    preferences: &PartnerPreference,
    weights: &ScoringWeights,
) -> u8 {
    score_breakdown(requester, candidate, preferences, weights).percentage()
}

/// Score every criterion independently
pub fn score_breakdown(
    _requester: &Profile,
    candidate: &Profile,
    preferences: &PartnerPreference,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        age: age_score(candidate, preferences, weights.age),
        height: height_score(candidate, preferences, weights.height),
        religion: list_score(&preferences.religion, candidate.religion.as_ref(), weights.religion),
        caste: list_score(&preferences.caste, candidate.caste.as_ref(), weights.caste),
        education: list_score(
            &preferences.education,
            candidate.education.highest_qualification.as_ref(),
            weights.education,
        ),
        occupation: list_score(
            &preferences.occupation,
            candidate.education.occupation.as_ref(),
            weights.occupation,
        ),
        location: location_score(candidate, preferences.location.as_ref(), weights.location),
        marital_status: list_score(
            &preferences.marital_status,
            candidate.marital_status.as_ref(),
            weights.marital_status,
        ),
        possible: weights.total(),
    }
}

/// Full weight inside the range, linear fall-off outside it
#[inline]
fn age_score(candidate: &Profile, preferences: &PartnerPreference, weight: u32) -> u32 {
    let (Some(range), Some(age)) = (preferences.age_range, candidate.age) else {
        return 0;
    };
    weight.saturating_sub(range.distance(age).saturating_mul(AGE_PENALTY_PER_YEAR))
}

/// All or nothing. No height range earns 0 rather than full credit; kept for
/// compatibility with existing scores until product decides otherwise.
#[inline]
fn height_score(candidate: &Profile, preferences: &PartnerPreference, weight: u32) -> u32 {
    match (preferences.height_range, candidate.height) {
        (Some(range), Some(height)) if range.contains(height) => weight,
        _ => 0,
    }
}

#[inline]
fn list_score<T: PartialEq>(preferred: &[T], value: Option<&T>, weight: u32) -> u32 {
    if preferred.is_empty() {
        return weight;
    }
    match value {
        Some(value) if preferred.contains(value) => weight,
        _ => 0,
    }
}

/// Best single tier wins: city, then state (2/3), then country (1/3)
#[inline]
fn location_score(
    candidate: &Profile,
    preference: Option<&LocationPreference>,
    weight: u32,
) -> u32 {
    let preference = match preference {
        Some(preference) if !preference.is_unconstrained() => preference,
        _ => return weight,
    };

    let address = &candidate.address;
    if tier_matches(preference.city.as_deref(), address.city.as_ref()) {
        weight
    } else if tier_matches(preference.state.as_deref(), address.state.as_ref()) {
        // Two thirds of a u32 always fits back into u32
        (u64::from(weight) * 2 / 3) as u32
    } else if tier_matches(preference.country.as_deref(), address.country.as_ref()) {
        weight / 3
    } else {
        0
    }
}

#[inline]
fn tier_matches(preferred: Option<&[String]>, value: Option<&String>) -> bool {
    match (preferred, value) {
        (Some(preferred), Some(value)) => preferred.contains(value),
        _ => false,
    }
}
