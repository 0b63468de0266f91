use rayon::prelude::*;
use std::cmp::Reverse;
use validator::Validate;
use crate::error::{MatchError, Result};
use crate::models::{PartnerPreference, Profile, ScoredMatch, ScoringWeights, SearchRequest, SortBy};
use crate::core::{
    filters::{is_eligible, matches_search_filters, matches_suggestion_constraints},
    scoring::calculate_match_score,
};

/// Result of the suggestion pipeline
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// One page of search results
#[derive(Debug)]
pub struct SearchPage {
    pub profiles: Vec<Profile>,
    pub total: usize,
    pub page: u32,
    pub pages: u32,
}

/// Caps applied to each listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    pub candidate_limit: usize,
    pub recent_limit: usize,
    pub nearby_limit: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            candidate_limit: 50,
            recent_limit: 20,
            nearby_limit: 20,
        }
    }
}

/// Matching orchestrator
///
/// # Suggestion pipeline
/// 1. Hard-constraint retrieval filter, in retrieval order
/// 2. Cap at `candidate_limit`
/// 3. Score every remaining candidate
/// 4. Stable sort by score, descending
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    limits: MatchLimits,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, limits: MatchLimits) -> Self {
        Self { weights, limits }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), MatchLimits::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Suggest partners for `requester` from `candidates`
    ///
    /// # Arguments
    /// * `requester` - Profile of the member asking for suggestions
    /// * `preferences` - The requester's partner preferences
    /// * `candidates` - Profiles in retrieval order
    ///
    /// # Returns
    /// Scored matches, best first. Equal scores keep retrieval order.
    pub fn suggest(
        &self,
        requester: &Profile,
        preferences: &PartnerPreference,
        candidates: Vec<Profile>,
    ) -> Result<MatchResult> {
        preferences.validate().map_err(MatchError::InvalidPreferences)?;

        let retrieved: Vec<Profile> = candidates
            .into_iter()
            .filter(|candidate| matches_suggestion_constraints(requester, candidate, preferences))
            .take(self.limits.candidate_limit)
            .collect();
        let total_candidates = retrieved.len();

        tracing::debug!(
            "Scoring {} candidates for {}",
            total_candidates,
            requester.user_id
        );

        // Indexed parallel collect keeps retrieval order
        let mut matches: Vec<ScoredMatch> = retrieved
            .into_par_iter()
            .map(|profile| {
                let match_score =
                    calculate_match_score(requester, &profile, preferences, &self.weights);
                ScoredMatch { profile, match_score }
            })
            .collect();

        matches.sort_by_key(|m| Reverse(m.match_score));

        tracing::info!(
            "Suggested {} matches for user {}",
            matches.len(),
            requester.user_id
        );

        Ok(MatchResult {
            matches,
            total_candidates,
        })
    }

    /// Filtered, sorted and paginated profile search
    pub fn search(
        &self,
        requester_id: &str,
        request: &SearchRequest,
        candidates: Vec<Profile>,
    ) -> Result<SearchPage> {
        request.validate().map_err(MatchError::InvalidSearch)?;

        let mut profiles: Vec<Profile> = candidates
            .into_iter()
            .filter(|candidate| matches_search_filters(requester_id, candidate, request))
            .collect();

        sort_profiles(&mut profiles, request.sort_by);

        let total = profiles.len();
        let limit = request.limit as usize;
        let skip = (request.page as usize - 1).saturating_mul(limit);
        let pages = total.div_ceil(limit) as u32;

        let profiles: Vec<Profile> = profiles.into_iter().skip(skip).take(limit).collect();

        tracing::debug!(
            "Search for {} returned {} of {} profiles (page {}/{})",
            requester_id,
            profiles.len(),
            total,
            request.page,
            pages
        );

        Ok(SearchPage {
            profiles,
            total,
            page: request.page,
            pages,
        })
    }

    /// Newest eligible profiles first
    pub fn recent(&self, requester: &Profile, candidates: Vec<Profile>) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = candidates
            .into_iter()
            .filter(|candidate| is_eligible(requester, candidate))
            .collect();

        sort_profiles(&mut profiles, SortBy::Recent);
        profiles.truncate(self.limits.recent_limit);
        profiles
    }

    /// Eligible profiles in the requester's city
    pub fn nearby(&self, requester: &Profile, candidates: Vec<Profile>) -> Vec<Profile> {
        let Some(city) = requester.address.city.as_ref() else {
            tracing::debug!("No city on profile {}, nothing nearby", requester.user_id);
            return Vec::new();
        };

        candidates
            .into_iter()
            .filter(|candidate| is_eligible(requester, candidate))
            .filter(|candidate| candidate.address.city.as_ref() == Some(city))
            .take(self.limits.nearby_limit)
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Stable sort; profiles missing the sort key go last
fn sort_profiles(profiles: &mut [Profile], sort_by: SortBy) {
    match sort_by {
        SortBy::Recent => profiles.sort_by_key(|p| Reverse(p.created_at)),
        SortBy::Views => profiles.sort_by_key(|p| Reverse(p.profile_views)),
        SortBy::AgeAsc => profiles.sort_by_key(|p| (p.age.is_none(), p.age)),
        SortBy::AgeDesc => profiles.sort_by_key(|p| Reverse(p.age)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::models::{
        Address, AgeRange, Education, Gender, Lifestyle, LocationPreference, MaritalStatus, Privacy,
    };

    fn create_candidate(id: &str, age: u8, gender: Gender, city: &str) -> Profile {
        Profile {
            user_id: id.to_string(),
            first_name: format!("User {}", id),
            last_name: "Test".to_string(),
            gender,
            age: Some(age),
            height: Some(165),
            religion: Some("Hindu".to_string()),
            caste: None,
            marital_status: Some(MaritalStatus::NeverMarried),
            education: Education::default(),
            address: Address {
                city: Some(city.to_string()),
                state: Some("MH".to_string()),
                country: Some("India".to_string()),
            },
            lifestyle: Lifestyle::default(),
            privacy: Privacy::default(),
            is_profile_verified: false,
            profile_views: 0,
            created_at: Some(Utc::now()),
        }
    }

    fn create_requester() -> Profile {
        create_candidate("current_user", 30, Gender::Male, "Pune")
    }

    fn create_preferences() -> PartnerPreference {
        PartnerPreference {
            age_range: Some(AgeRange { min: 21, max: 35 }),
            location: Some(LocationPreference {
                city: Some(vec!["Pune".to_string()]),
                state: Some(vec!["MH".to_string()]),
                country: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_suggest_basic() {
        let matcher = Matcher::with_default_weights();

        let candidates = vec![
            create_candidate("1", 25, Gender::Female, "Pune"),   // Match
            create_candidate("2", 40, Gender::Female, "Pune"),   // Too old
            create_candidate("3", 25, Gender::Male, "Pune"),     // Wrong gender
        ];

        let result = matcher
            .suggest(&create_requester(), &create_preferences(), candidates)
            .unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile.user_id, "1");
    }

    #[test]
    fn test_suggest_sorted_and_stable() {
        let matcher = Matcher::with_default_weights();

        let candidates = vec![
            create_candidate("1", 25, Gender::Female, "Mumbai"), // State match only
            create_candidate("2", 26, Gender::Female, "Pune"),   // City match
            create_candidate("3", 27, Gender::Female, "Mumbai"), // Ties with 1
        ];

        let result = matcher
            .suggest(&create_requester(), &create_preferences(), candidates)
            .unwrap();

        let order: Vec<&str> = result.matches.iter().map(|m| m.profile.user_id.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3"]);
        assert!(result.matches[0].match_score > result.matches[1].match_score);
        assert_eq!(result.matches[1].match_score, result.matches[2].match_score);
    }

    #[test]
    fn test_candidate_cap() {
        let matcher = Matcher::with_default_weights();

        let candidates: Vec<Profile> = (0..80)
            .map(|i| create_candidate(&i.to_string(), 25, Gender::Female, "Pune"))
            .collect();

        let result = matcher
            .suggest(&create_requester(), &create_preferences(), candidates)
            .unwrap();

        assert_eq!(result.total_candidates, 50);
        assert_eq!(result.matches.len(), 50);
    }

    #[test]
    fn test_invalid_preferences_rejected() {
        let matcher = Matcher::with_default_weights();
        let preferences = PartnerPreference {
            age_range: Some(AgeRange { min: 40, max: 20 }),
            ..Default::default()
        };

        let result = matcher.suggest(&create_requester(), &preferences, vec![]);
        assert!(matches!(result, Err(MatchError::InvalidPreferences(_))));
    }

    #[test]
    fn test_search_pagination() {
        let matcher = Matcher::with_default_weights();
        let candidates: Vec<Profile> = (0..25)
            .map(|i| create_candidate(&i.to_string(), 20 + (i % 10) as u8, Gender::Female, "Pune"))
            .collect();

        let request = SearchRequest {
            sort_by: SortBy::AgeAsc,
            page: 3,
            limit: 10,
            ..Default::default()
        };

        let page = matcher.search("current_user", &request, candidates).unwrap();

        assert_eq!(page.total, 25);
        assert_eq!(page.pages, 3);
        let ages: Vec<Option<u8>> = page.profiles.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![Some(27), Some(28), Some(28), Some(29), Some(29)]);
    }

    #[test]
    fn test_recent_newest_first() {
        let matcher = Matcher::with_default_weights();
        let now = Utc::now();

        let mut old = create_candidate("old", 25, Gender::Female, "Pune");
        old.created_at = Some(now - Duration::days(10));
        let mut new = create_candidate("new", 25, Gender::Female, "Pune");
        new.created_at = Some(now);
        let man = create_candidate("man", 25, Gender::Male, "Pune");

        let profiles = matcher.recent(&create_requester(), vec![old, man, new]);
        let ids: Vec<&str> = profiles.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_nearby_same_city() {
        let matcher = Matcher::with_default_weights();
        let candidates = vec![
            create_candidate("1", 25, Gender::Female, "Pune"),
            create_candidate("2", 25, Gender::Female, "Delhi"),
        ];

        let profiles = matcher.nearby(&create_requester(), candidates);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].user_id, "1");

        let mut no_city = create_requester();
        no_city.address.city = None;
        let candidates = vec![create_candidate("1", 25, Gender::Female, "Pune")];
        assert!(matcher.nearby(&no_city, candidates).is_empty());
    }
}
