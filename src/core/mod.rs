// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{is_eligible, matches_search_filters, matches_suggestion_constraints};
pub use matcher::{MatchLimits, MatchResult, Matcher, SearchPage};
pub use scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};
