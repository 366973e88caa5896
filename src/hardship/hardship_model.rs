use chrono::NaiveDate;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::details::{DetailError, FinancialDetailItem, SolicitorCosts};

pub const COURT_TYPE_MAGISTRATE: &str = "MAGISTRATE";
pub const COURT_TYPE_CROWN_COURT: &str = "CROWN_COURT";

/// Court venue for the case under review. Solicitor costs only count
/// towards hardship in the magistrates' court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourtType {
    Magistrate,
    CrownCourt,
}

impl CourtType {
    pub const ALL: [CourtType; 2] = [CourtType::Magistrate, CourtType::CrownCourt];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourtType::Magistrate => COURT_TYPE_MAGISTRATE,
            CourtType::CrownCourt => COURT_TYPE_CROWN_COURT,
        }
    }
}

lazy_static! {
    static ref COURT_TYPE_BY_CODE: HashMap<&'static str, CourtType> =
        CourtType::ALL.iter().map(|c| (c.as_str(), *c)).collect();
}

impl FromStr for CourtType {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COURT_TYPE_BY_CODE
            .get(s)
            .copied()
            .ok_or_else(|| DetailError::UnknownCode {
                kind: "court type",
                code: s.to_string(),
            })
    }
}

/// Input to a hardship calculation.
///
/// An absent `court_type` behaves as "not magistrates' court": solicitor
/// costs are excluded from the total. This mirrors the upstream contract
/// rather than rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardshipReviewRequest {
    pub court_type: Option<CourtType>,
    #[serde(default, with = "crate::utils::decimal_serde::decimal_serde_option")]
    pub total_annual_disposable_income: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicitor_costs: Option<SolicitorCosts>,
    #[serde(default)]
    pub denied_income: Vec<FinancialDetailItem>,
    #[serde(default)]
    pub extra_expenditure: Vec<FinancialDetailItem>,
    pub review_date: NaiveDate,
}

/// PASS/FAIL verdict of a hardship review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HardshipReviewResult {
    Pass,
    Fail,
}

/// Outcome of a hardship calculation. Constructed once per calculation
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardshipResult {
    pub review_result: HardshipReviewResult,
    pub result_date: NaiveDate,
    #[serde(with = "crate::utils::decimal_serde::decimal_serde")]
    pub post_hardship_disposable_income: Decimal,
}
