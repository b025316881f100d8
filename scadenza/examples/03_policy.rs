use std::sync::Arc;

use rust_decimal::Decimal;
use scadenza::{AssetKind, Instrument, MarketTrend, RiskTolerance, Scadenza};
use scadenza_mock::MockExpirations;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = chrono::Utc::now().date_naive();
    let provider = Arc::new(MockExpirations::anchored(today));
    let scadenza = Scadenza::builder().with_provider(provider).build()?;

    let spy = Instrument::from_symbol("SPY", AssetKind::Equity).expect("valid instrument symbol");

    println!("Configured DTEs: {:?}", scadenza.configured_dtes(None));
    println!(
        "Listed right now: {:?}",
        scadenza.discovered_dtes(&spy, None).await
    );

    let account = Decimal::from(10_000);
    if let Some(dte) = scadenza.recommended_for_account(account, RiskTolerance::Medium) {
        println!("Recommended for a $10k account: {dte} DTE");
        println!("  risk multiplier: {}", scadenza.risk_multiplier(dte));
        println!("  data window: {:?}", scadenza.data_config(dte));
    }

    if let Some(dte) = scadenza.recommended_for_market(Some(34.0), MarketTrend::Bearish) {
        println!("Recommended in a volatile bear market: {dte} DTE");
    }

    let assessment = scadenza.assess_for_account(0, account, Decimal::from(800));
    println!(
        "Same-day trade with an 8% position: valid={} risk={:?}",
        assessment.is_valid, assessment.risk_level
    );
    for warning in &assessment.warnings {
        println!("  warning: {warning}");
    }

    Ok(())
}
