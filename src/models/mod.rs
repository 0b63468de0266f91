// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Address, AgeRange, Diet, Education, Gender, HeightRange, Lifestyle, LocationPreference,
    MaritalStatus, PartnerPreference, Privacy, Profile, ScoredMatch, ScoringWeights, Visibility,
};
pub use requests::{SearchRequest, SortBy, SuggestionRequest};
pub use responses::{ErrorResponse, ProfileListResponse, SearchResponse, SuggestedMatchesResponse};
