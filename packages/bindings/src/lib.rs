use napi::Result as NapiResult;
use napi_derive::napi;

use bond_design_core::design::score::credit_score_with_factors;
use bond_design_core::design::CreditRating;
use bond_design_core::market::MarketData;
use bond_design_core::BondInputs;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Estimate full bond terms. Takes `BondInputs` as a JSON string, returns
/// the `ComputationOutput<BondPrediction>` envelope as a JSON string.
#[napi]
pub fn predict_bond_design(input_json: String) -> NapiResult<String> {
    let input: BondInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        bond_design_core::design::predict_bond_design(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Credit score, rating, and factor breakdown as a JSON string.
#[napi]
pub fn credit_score(input_json: String) -> NapiResult<String> {
    let input: BondInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let (score, factors) = credit_score_with_factors(&input);
    let rating = CreditRating::from_score(score);
    let report = serde_json::json!({
        "credit_score": score,
        "credit_rating": rating,
        "investment_grade": rating.is_investment_grade(),
        "factors": factors,
    });
    serde_json::to_string(&report).map_err(to_napi_error)
}

/// Fallback market-context snapshot with the implied benchmark rate.
#[napi]
pub fn market_fallback() -> NapiResult<String> {
    let data = MarketData::fallback();
    let report = serde_json::json!({
        "treasury_rate": data.treasury_rate,
        "corporate_spread": data.corporate_spread,
        "implied_market_rate": data.implied_market_rate(),
        "last_updated": data.last_updated.to_rfc3339(),
    });
    serde_json::to_string(&report).map_err(to_napi_error)
}
