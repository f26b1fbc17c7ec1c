//! Simulation report and text rendering

use super::SimulationInput;
use crate::engine::{
    FeeBreakdown, ProjectionPoint, QualityLevel, RoiResult, Scenario, ShareInvestment,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Currency label used in rendered output
pub const CURRENCY: &str = "AED";

/// Estimate for one scenario with its headline markup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioEstimate {
    pub scenario: Scenario,
    pub value: Decimal,
    /// Uplift over the initial value in percent, including appreciation
    pub total_markup_pct: Decimal,
    /// Value minus the initial property value
    pub gain: Decimal,
}

/// Composition of the total investment (pie chart data)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentBreakdown {
    pub initial_investment: Decimal,
    pub package_cost: Decimal,
    pub total: Decimal,
    pub initial_investment_pct: Decimal,
    pub package_cost_pct: Decimal,
}

impl InvestmentBreakdown {
    pub fn new(initial_investment: Decimal, package_cost: Decimal) -> Self {
        let total = initial_investment + package_cost;
        let (initial_investment_pct, package_cost_pct) = if total.is_zero() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let initial_pct = initial_investment / total * dec!(100);
            (initial_pct, dec!(100) - initial_pct)
        };

        Self {
            initial_investment,
            package_cost,
            total,
            initial_investment_pct,
            package_cost_pct,
        }
    }
}

/// Everything one simulation run produces
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub input: SimulationInput,
    /// Package rate per square foot for the chosen tier
    pub package_rate: Decimal,
    pub total_cost: Decimal,
    pub estimates: Vec<ScenarioEstimate>,
    pub selected_scenario: Scenario,
    /// Sale value under the selected scenario
    pub final_value: Decimal,
    /// Fee jurisdiction label
    pub jurisdiction: String,
    pub fees: FeeBreakdown,
    pub roi: RoiResult,
    pub share_amount: Decimal,
    pub share: ShareInvestment,
    pub projection: Vec<ProjectionPoint>,
    pub breakdown: InvestmentBreakdown,
}

impl SimulationReport {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"══════════════════════════════════════════════════════
           REAL ESTATE INVESTMENT SIMULATION
══════════════════════════════════════════════════════

PACKAGE ({quality})
───────────────────────────────────────────────────────
Property Value:   {property_value}
Size:             {square_feet} sq ft
Package Rate:     {package_rate} per sq ft
Package Cost:     {total_cost}

ESTIMATED SALE PRICES
───────────────────────────────────────────────────────
{estimates}
{jurisdiction} PROPERTY FEES
───────────────────────────────────────────────────────
DLD Fee:          {dld_fee}
Broker Fee:       {broker_fee}
Title Deed Fee:   {title_deed_fee}
Conveyance Fee:   {conveyance_fee}
Total Fees:       {total_fees}

INVESTMENT ANALYSIS
───────────────────────────────────────────────────────
Total Investment: {total_investment}
Total Profit:     {total_profit}
Investor Profit:  {investor_profit}
Company Profit:   {company_profit}
Annual ROI:       {annual_roi:.2}%

SHARE INVESTMENT
───────────────────────────────────────────────────────
Amount:           {share_amount}
Project Share:    {share_pct:.2}%
Monthly Returns:  {monthly_returns}
Total Returns:    {total_returns}
Annual Rate:      {annual_rate:.2}%

INVESTMENT BREAKDOWN
───────────────────────────────────────────────────────
Initial:          {initial} ({initial_pct:.1}%)
Package:          {package} ({package_pct:.1}%)

PROJECTED VALUE
───────────────────────────────────────────────────────
{projection}══════════════════════════════════════════════════════
"#,
            quality = quality_label(self.input.quality_level),
            property_value = currency(self.input.property_value),
            square_feet = self.input.square_feet,
            package_rate = currency(self.package_rate),
            total_cost = currency(self.total_cost),
            estimates = self.estimate_rows(),
            jurisdiction = self.jurisdiction.to_uppercase(),
            dld_fee = currency(self.fees.dld_fee),
            broker_fee = currency(self.fees.broker_fee),
            title_deed_fee = currency(self.fees.title_deed_fee),
            conveyance_fee = currency(self.fees.conveyance_fee),
            total_fees = currency(self.fees.total_fees),
            total_investment = currency(self.roi.total_investment),
            total_profit = signed_currency(self.roi.total_profit),
            investor_profit = signed_currency(self.roi.investor_profit),
            company_profit = signed_currency(self.roi.company_profit),
            annual_roi = self.roi.annual_roi,
            share_amount = currency(self.share_amount),
            share_pct = self.share.share_percentage,
            monthly_returns = currency(self.share.monthly_returns),
            total_returns = currency(self.share.total_returns),
            annual_rate = self.share.effective_annual_return,
            initial = currency(self.breakdown.initial_investment),
            initial_pct = self.breakdown.initial_investment_pct,
            package = currency(self.breakdown.package_cost),
            package_pct = self.breakdown.package_cost_pct,
            projection = self.projection_rows(),
        )
    }

    /// One line per scenario, the selected one marked with `*`
    fn estimate_rows(&self) -> String {
        self.estimates
            .iter()
            .map(|est| {
                let marker = if est.scenario == self.selected_scenario {
                    "*"
                } else {
                    " "
                };
                format!(
                    "{} {:<13} (+{:.1}%)  {}  ({})\n",
                    marker,
                    title_case(est.scenario.as_str()),
                    est.total_markup_pct,
                    currency(est.value),
                    signed_currency(est.gain),
                )
            })
            .collect()
    }

    fn projection_rows(&self) -> String {
        self.projection
            .iter()
            .map(|point| format!("Month {:>3}:        {}\n", point.month, currency(point.value)))
            .collect()
    }
}

fn quality_label(level: QualityLevel) -> String {
    title_case(level.as_str())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render an amount as `AED 1,234,567.89`
pub fn currency(value: Decimal) -> String {
    format!("{} {}", CURRENCY, group_thousands(value))
}

/// Like [`currency`] with an explicit sign
pub fn signed_currency(value: Decimal) -> String {
    let sign = if value.round_dp(2) < Decimal::ZERO {
        "-"
    } else {
        "+"
    };
    format!("{}{} {}", sign, CURRENCY, group_thousands(value.abs()))
}

fn group_thousands(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}
