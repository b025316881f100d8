use std::sync::Arc;

use scadenza::{AssetKind, Discovery, DiscoveryRequest, Instrument, Scadenza};
use scadenza_mock::MockExpirations;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Setup the discoverer with the deterministic mock provider.
    let today = chrono::Utc::now().date_naive();
    let provider = Arc::new(MockExpirations::anchored(today));
    let scadenza = Scadenza::builder().with_provider(provider).build()?;

    // 2. Ask for a roughly monthly expiration: 32 days out, 5 days of slack.
    let spy = Instrument::from_symbol("SPY", AssetKind::Equity).expect("valid instrument symbol");
    let req = DiscoveryRequest::new(32, 5)?;

    match scadenza.find_optimal_dte(&spy, &req).await {
        Discovery::Found(result) => {
            println!(
                "Selected {} DTE ({}) with {} listed contracts, {} day(s) from target.",
                result.selected_dte(),
                result.expiration(),
                result.option_count(),
                result.distance_from_target,
            );
            for alt in result.alternatives.iter().take(3) {
                println!(
                    "  alternative: {} DTE ({} contracts)",
                    alt.days_to_expiration, alt.option_count
                );
            }
        }
        Discovery::NotFound(miss) => {
            println!(
                "No tradeable expiration within {}±{} days: {:?}",
                miss.target_dte, miss.tolerance, miss.reason
            );
        }
    }

    Ok(())
}
