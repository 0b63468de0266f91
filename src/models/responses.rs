use serde::{Deserialize, Serialize};
use crate::core::SearchPage;
use crate::models::domain::{Profile, ScoredMatch};

/// Scored suggestions, best first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedMatchesResponse {
    pub success: bool,
    pub count: usize,
    pub matches: Vec<ScoredMatch>,
}

impl SuggestedMatchesResponse {
    pub fn new(matches: Vec<ScoredMatch>) -> Self {
        Self {
            success: true,
            count: matches.len(),
            matches,
        }
    }
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub total: usize,
    pub page: u32,
    pub pages: u32,
    pub profiles: Vec<Profile>,
}

impl From<SearchPage> for SearchResponse {
    fn from(page: SearchPage) -> Self {
        Self {
            success: true,
            count: page.profiles.len(),
            total: page.total,
            page: page.page,
            pages: page.pages,
            profiles: page.profiles,
        }
    }
}

/// Plain profile listing (recent, nearby)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub success: bool,
    pub count: usize,
    pub profiles: Vec<Profile>,
}

impl ProfileListResponse {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            success: true,
            count: profiles.len(),
            profiles,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
