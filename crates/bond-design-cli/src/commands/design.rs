use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use bond_design_core::design::score::{credit_score_with_factors, ScoreFactor};
use bond_design_core::design::{predict_bond_design, CreditRating};
use bond_design_core::market::DEFAULT_TREASURY_RATE;
use bond_design_core::types::Industry;
use bond_design_core::BondInputs;

use crate::input;

/// Company financials shared by the design and score commands.
#[derive(Args)]
pub struct CompanyArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Company name (display only, not scored)
    #[arg(long)]
    pub company_name: Option<String>,

    /// Annual revenue, millions
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Profit margin, percent
    #[arg(long)]
    pub profit_margin: Option<Decimal>,

    /// Debt/EBITDA multiple
    #[arg(long)]
    pub debt_to_ebitda: Option<Decimal>,

    /// Industry sector (e.g. technology, healthcare, real-estate)
    #[arg(long)]
    pub industry: Option<String>,

    /// Amount to be raised, millions
    #[arg(long)]
    pub target_raise: Option<Decimal>,

    /// Benchmark market rate, percent (defaults to 4.0)
    #[arg(long)]
    pub market_rate: Option<Decimal>,
}

impl CompanyArgs {
    /// Resolve inputs from file, piped stdin, or individual flags,
    /// in that order of precedence.
    fn resolve(self) -> Result<BondInputs, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::read_document(path);
        }
        if let Some(data) = input::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }

        let industry: Industry = self
            .industry
            .ok_or("--industry is required (or provide --input)")?
            .parse()?;

        Ok(BondInputs {
            company_name: self
                .company_name
                .ok_or("--company-name is required (or provide --input)")?,
            revenue: self
                .revenue
                .ok_or("--revenue is required (or provide --input)")?,
            profit_margin: self
                .profit_margin
                .ok_or("--profit-margin is required (or provide --input)")?,
            debt_to_ebitda: self
                .debt_to_ebitda
                .ok_or("--debt-to-ebitda is required (or provide --input)")?,
            industry,
            target_raise: self
                .target_raise
                .ok_or("--target-raise is required (or provide --input)")?,
            market_rate: self.market_rate.unwrap_or(DEFAULT_TREASURY_RATE),
        })
    }
}

/// Arguments for full bond term estimation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DesignArgs {
    #[command(flatten)]
    pub company: CompanyArgs,
}

/// Arguments for the score/rating breakdown
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub company: CompanyArgs,
}

#[derive(Serialize)]
struct ScoreReport {
    company_name: String,
    credit_score: i32,
    credit_rating: CreditRating,
    investment_grade: bool,
    factors: Vec<ScoreFactor>,
}

pub fn run_design(args: DesignArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.company.resolve()?;
    let result = predict_bond_design(&inputs)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_score(args: ScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = args.company.resolve()?;
    let (credit_score, factors) = credit_score_with_factors(&inputs);
    let credit_rating = CreditRating::from_score(credit_score);

    let report = ScoreReport {
        company_name: inputs.company_name,
        credit_score,
        credit_rating,
        investment_grade: credit_rating.is_investment_grade(),
        factors,
    };
    Ok(serde_json::to_value(report)?)
}
