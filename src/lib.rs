//! Matrimony Match - partner-preference scoring for a matrimonial platform
//!
//! This library scores candidate profiles against a member's stated partner
//! preferences and provides the retrieval filters and listings around it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, score_breakdown, MatchLimits, Matcher, ScoreBreakdown};
pub use error::MatchError;
pub use models::{PartnerPreference, Profile, ScoredMatch, ScoringWeights, SuggestionRequest, SuggestedMatchesResponse};
pub use services::{ConnectionId, PresenceRegistry};
