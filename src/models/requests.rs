use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Diet, Gender, MaritalStatus, PartnerPreference, Profile};

/// Input consumed by the `matrimony-match` binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub requester: Profile,
    pub preferences: PartnerPreference,
    #[serde(default)]
    pub candidates: Vec<Profile>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortBy {
    #[default]
    Recent,
    Views,
    AgeAsc,
    AgeDesc,
}

impl SortBy {
    /// Unknown keys sort by most recent
    pub fn parse(value: &str) -> Self {
        match value {
            "views" => SortBy::Views,
            "age_asc" => SortBy::AgeAsc,
            "age_desc" => SortBy::AgeDesc,
            _ => SortBy::Recent,
        }
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        SortBy::parse(&value)
    }
}

/// Profile search filters
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(rename = "ageMin", default)]
    pub age_min: Option<u8>,
    #[serde(rename = "ageMax", default)]
    pub age_max: Option<u8>,
    #[serde(rename = "heightMin", default)]
    pub height_min: Option<u16>,
    #[serde(rename = "heightMax", default)]
    pub height_max: Option<u16>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(rename = "maritalStatus", default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub diet: Option<Diet>,
    #[serde(rename = "verifiedOnly", default)]
    pub verified_only: bool,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortBy,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            gender: None,
            age_min: None,
            age_max: None,
            height_min: None,
            height_max: None,
            religion: None,
            caste: None,
            marital_status: None,
            education: None,
            occupation: None,
            country: None,
            state: None,
            city: None,
            diet: None,
            verified_only: false,
            sort_by: SortBy::default(),
            page: default_page(),
            limit: default_limit(),
        }
    }
}
