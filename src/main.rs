use matrimony_match::config::Settings;
use matrimony_match::error::{MatchError, Result};
use matrimony_match::models::{ErrorResponse, SuggestedMatchesResponse, SuggestionRequest};
use matrimony_match::Matcher;
use tracing::{error, info};

/// Score a suggestion request read from a JSON file and print the ranked matches
#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Initialize logging
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(logging.level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(logging.format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    let outcome = match settings {
        Ok(settings) => run(settings).await,
        Err(e) => Err(MatchError::from(e)),
    };

    if let Err(e) = outcome {
        error!("Matching failed: {}", e);
        let response = ErrorResponse {
            success: false,
            message: e.to_string(),
        };
        if let Ok(body) = serde_json::to_string_pretty(&response) {
            println!("{}", body);
        }
        std::process::exit(1);
    }
}

async fn run(settings: Settings) -> Result<()> {
    let input = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MATRIMONY_INPUT").ok())
        .ok_or(MatchError::MissingInput)?;

    let matcher = Matcher::new(settings.weights(), settings.matching.limits());
    info!("Matcher initialized with weights: {:?}", matcher.weights());

    let raw = tokio::fs::read_to_string(&input).await?;
    let request: SuggestionRequest = serde_json::from_str(&raw)?;

    info!(
        "Loaded request for {} with {} candidates from {}",
        request.requester.user_id,
        request.candidates.len(),
        input
    );

    let result = matcher.suggest(&request.requester, &request.preferences, request.candidates)?;

    info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        request.requester.user_id,
        result.total_candidates
    );

    let response = SuggestedMatchesResponse::new(result.matches);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
