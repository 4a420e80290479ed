use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use bond_design_core::market::{
    MarketData, DEFAULT_CORPORATE_SPREAD, DEFAULT_TREASURY_RATE,
};
use bond_design_core::types::Percent;

/// Arguments for the market-context snapshot
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MarketArgs {
    /// Treasury yield override, percent (defaults to 4.0)
    #[arg(long)]
    pub treasury: Option<Decimal>,

    /// Corporate index spread override, percent (defaults to 2.5)
    #[arg(long)]
    pub spread: Option<Decimal>,
}

#[derive(Serialize)]
struct MarketReport {
    treasury_rate: Percent,
    corporate_spread: Percent,
    /// Treasury yield plus spread; the benchmark to feed into `design`.
    implied_market_rate: Percent,
    last_updated: String,
}

pub fn run_market(args: MarketArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let data = MarketData::new(
        args.treasury.unwrap_or(DEFAULT_TREASURY_RATE),
        args.spread.unwrap_or(DEFAULT_CORPORATE_SPREAD),
    );

    let report = MarketReport {
        treasury_rate: data.treasury_rate,
        corporate_spread: data.corporate_spread,
        implied_market_rate: data.implied_market_rate(),
        last_updated: data.last_updated.to_rfc3339(),
    };
    Ok(serde_json::to_value(report)?)
}
