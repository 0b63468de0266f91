use crate::models::{LocationPreference, PartnerPreference, Profile, SearchRequest};

/// Check if a candidate passes the hard constraints of a suggestion query
///
/// This is the retrieval stage: candidates that fail here are never scored.
/// Caste, education and occupation are deliberately absent; they only move
/// the score.
#[inline]
pub fn matches_suggestion_constraints(
    requester: &Profile,
    candidate: &Profile,
    preferences: &PartnerPreference,
) -> bool {
    if !is_eligible(requester, candidate) {
        return false;
    }

    // Check age range
    if let Some(range) = preferences.age_range {
        if !candidate.age.is_some_and(|age| range.contains(age)) {
            return false;
        }
    }

    // Check height range
    if let Some(range) = preferences.height_range {
        if !candidate.height.is_some_and(|height| range.contains(height)) {
            return false;
        }
    }

    // Check marital status
    if !preferences.marital_status.is_empty()
        && !candidate
            .marital_status
            .is_some_and(|status| preferences.marital_status.contains(&status))
    {
        return false;
    }

    // Check religion
    if !preferences.religion.is_empty()
        && !candidate
            .religion
            .as_ref()
            .is_some_and(|religion| preferences.religion.contains(religion))
    {
        return false;
    }

    if let Some(location) = &preferences.location {
        if !location.is_unconstrained() && !matches_any_location(candidate, location) {
            return false;
        }
    }

    true
}

/// Not self, opposite gender, visible
#[inline]
pub fn is_eligible(requester: &Profile, candidate: &Profile) -> bool {
    candidate.user_id != requester.user_id
        && candidate.gender == requester.gender.opposite()
        && candidate.is_visible()
}

/// Any one tier matching is enough at retrieval time
fn matches_any_location(candidate: &Profile, location: &LocationPreference) -> bool {
    let address = &candidate.address;
    [
        (&location.country, &address.country),
        (&location.state, &address.state),
        (&location.city, &address.city),
    ]
    .iter()
    .any(|(preferred, value)| match (preferred, value) {
        (Some(preferred), Some(value)) => preferred.contains(value),
        _ => false,
    })
}

/// Check if a profile satisfies every filter given in a search request
#[inline]
pub fn matches_search_filters(
    requester_id: &str,
    candidate: &Profile,
    request: &SearchRequest,
) -> bool {
    if candidate.user_id == requester_id || !candidate.is_visible() {
        return false;
    }

    if request.gender.is_some_and(|gender| candidate.gender != gender) {
        return false;
    }

    if let Some(min) = request.age_min {
        if !candidate.age.is_some_and(|age| age >= min) {
            return false;
        }
    }
    if let Some(max) = request.age_max {
        if !candidate.age.is_some_and(|age| age <= max) {
            return false;
        }
    }

    if let Some(min) = request.height_min {
        if !candidate.height.is_some_and(|height| height >= min) {
            return false;
        }
    }
    if let Some(max) = request.height_max {
        if !candidate.height.is_some_and(|height| height <= max) {
            return false;
        }
    }

    if request.marital_status.is_some() && candidate.marital_status != request.marital_status {
        return false;
    }
    if request.diet.is_some() && candidate.lifestyle.diet != request.diet {
        return false;
    }
    if request.verified_only && !candidate.is_profile_verified {
        return false;
    }

    let text_filters = [
        (&request.religion, &candidate.religion),
        (&request.caste, &candidate.caste),
        (&request.education, &candidate.education.highest_qualification),
        (&request.occupation, &candidate.education.occupation),
        (&request.country, &candidate.address.country),
        (&request.state, &candidate.address.state),
        (&request.city, &candidate.address.city),
    ];

    text_filters
        .iter()
        .all(|(wanted, actual)| wanted.is_none() || wanted == actual)
}
