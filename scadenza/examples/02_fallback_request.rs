use std::sync::Arc;

use scadenza::{AssetKind, Discovery, DiscoveryRequest, Instrument, Scadenza};
use scadenza_mock::MockExpirations;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = chrono::Utc::now().date_naive();
    let provider = Arc::new(MockExpirations::anchored(today));
    let scadenza = Scadenza::builder().with_provider(provider).build()?;

    let spy = Instrument::from_symbol("SPY", AssetKind::Equity).expect("valid instrument symbol");

    // A deliberately unreachable primary target (200 days out, 2 days of
    // slack) with a weekly fallback. The fallback is an explicit second
    // request owned by the caller, not a widening of the first.
    let primary = DiscoveryRequest::new(200, 2)?;
    let weekly = DiscoveryRequest::new(7, 3)?;

    let out = scadenza
        .find_optimal_dte_with_fallback(&spy, &primary, &weekly)
        .await;

    match &out {
        Discovery::Found(result) => {
            println!(
                "Fallback selected {} DTE ({}).",
                result.selected_dte(),
                result.expiration()
            );
        }
        Discovery::NotFound(miss) => {
            println!(
                "Both requests missed; falling back to the nominal {} DTE.",
                miss.target_dte
            );
        }
    }

    // Either way there is a DTE to act on: the selection, or the caller's
    // nominal target as the last resort.
    println!("Acting on {} DTE.", out.dte_or_target());

    Ok(())
}
