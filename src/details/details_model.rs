use chrono::NaiveDate;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use super::details_constants::*;
use super::details_errors::DetailError;
use crate::errors::ValidationError;

/// Calculation-relevant detail categories. The case-management system also
/// stores progress-tracking (`ACTION`) rows; those are rejected at the parse
/// boundary rather than silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailCategory {
    #[serde(rename = "INCOME")]
    DeniedIncome,
    #[serde(rename = "EXPENDITURE")]
    ExtraExpenditure,
    #[serde(rename = "FUNDING")]
    OtherFunding,
    #[serde(rename = "SOLICITOR_COSTS")]
    SolicitorCosts,
}

impl DetailCategory {
    pub const ALL: [DetailCategory; 4] = [
        DetailCategory::DeniedIncome,
        DetailCategory::ExtraExpenditure,
        DetailCategory::OtherFunding,
        DetailCategory::SolicitorCosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailCategory::DeniedIncome => CATEGORY_DENIED_INCOME,
            DetailCategory::ExtraExpenditure => CATEGORY_EXTRA_EXPENDITURE,
            DetailCategory::OtherFunding => CATEGORY_OTHER_FUNDING,
            DetailCategory::SolicitorCosts => CATEGORY_SOLICITOR_COSTS,
        }
    }
}

/// Payment frequency with its annualization weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "WEEKLY")]
    Weekly,
    #[serde(rename = "2WEEKLY")]
    TwoWeekly,
    #[serde(rename = "4WEEKLY")]
    FourWeekly,
    #[serde(rename = "MONTHLY")]
    Monthly,
    #[serde(rename = "ANNUALLY")]
    Annually,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Weekly,
        Frequency::TwoWeekly,
        Frequency::FourWeekly,
        Frequency::Monthly,
        Frequency::Annually,
    ];

    /// Number of payments per year at this frequency.
    pub fn per_year(&self) -> u32 {
        match self {
            Frequency::Weekly => 52,
            Frequency::TwoWeekly => 26,
            Frequency::FourWeekly => 13,
            Frequency::Monthly => 12,
            Frequency::Annually => 1,
        }
    }

    pub fn weight(&self) -> Decimal {
        Decimal::from(self.per_year())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => FREQUENCY_WEEKLY,
            Frequency::TwoWeekly => FREQUENCY_TWO_WEEKLY,
            Frequency::FourWeekly => FREQUENCY_FOUR_WEEKLY,
            Frequency::Monthly => FREQUENCY_MONTHLY,
            Frequency::Annually => FREQUENCY_ANNUALLY,
        }
    }
}

/// Reason an income source was denied. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeniedIncomeCode {
    #[serde(rename = "MEDICAL_GROUNDS")]
    MedicalGrounds,
    #[serde(rename = "SUSPENDED")]
    Suspended,
    #[serde(rename = "SELF_EMPLOYED")]
    SelfEmployed,
    #[serde(rename = "OTHER_INC")]
    Other,
}

impl DeniedIncomeCode {
    pub const ALL: [DeniedIncomeCode; 4] = [
        DeniedIncomeCode::MedicalGrounds,
        DeniedIncomeCode::Suspended,
        DeniedIncomeCode::SelfEmployed,
        DeniedIncomeCode::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeniedIncomeCode::MedicalGrounds => DENIED_INCOME_MEDICAL_GROUNDS,
            DeniedIncomeCode::Suspended => DENIED_INCOME_SUSPENDED,
            DeniedIncomeCode::SelfEmployed => DENIED_INCOME_SELF_EMPLOYED,
            DeniedIncomeCode::Other => DENIED_INCOME_OTHER,
        }
    }
}

/// What the extra expenditure is for. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenditureCode {
    #[serde(rename = "CHILDCARE")]
    Childcare,
    #[serde(rename = "DEBTS")]
    Debts,
    #[serde(rename = "MEDICAL")]
    Medical,
    #[serde(rename = "TRAVEL")]
    Travel,
    #[serde(rename = "OTHER_EXP")]
    Other,
}

impl ExpenditureCode {
    pub const ALL: [ExpenditureCode; 5] = [
        ExpenditureCode::Childcare,
        ExpenditureCode::Debts,
        ExpenditureCode::Medical,
        ExpenditureCode::Travel,
        ExpenditureCode::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenditureCode::Childcare => EXPENDITURE_CHILDCARE,
            ExpenditureCode::Debts => EXPENDITURE_DEBTS,
            ExpenditureCode::Medical => EXPENDITURE_MEDICAL,
            ExpenditureCode::Travel => EXPENDITURE_TRAVEL,
            ExpenditureCode::Other => EXPENDITURE_OTHER,
        }
    }
}

/// Caseworker justification attached to an extra-expenditure item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenditureReasonCode {
    #[serde(rename = "ALLOWED")]
    Allowed,
    #[serde(rename = "ESSENTIAL")]
    Essential,
    #[serde(rename = "EVIDENCED")]
    Evidenced,
}

impl ExpenditureReasonCode {
    pub const ALL: [ExpenditureReasonCode; 3] = [
        ExpenditureReasonCode::Allowed,
        ExpenditureReasonCode::Essential,
        ExpenditureReasonCode::Evidenced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenditureReasonCode::Allowed => REASON_ALLOWED,
            ExpenditureReasonCode::Essential => REASON_ESSENTIAL,
            ExpenditureReasonCode::Evidenced => REASON_EVIDENCED,
        }
    }
}

lazy_static! {
    static ref CATEGORY_BY_CODE: HashMap<&'static str, DetailCategory> = DetailCategory::ALL
        .iter()
        .map(|c| (c.as_str(), *c))
        .collect();
    static ref FREQUENCY_BY_CODE: HashMap<&'static str, Frequency> = Frequency::ALL
        .iter()
        .map(|f| (f.as_str(), *f))
        .collect();
    static ref DENIED_INCOME_BY_CODE: HashMap<&'static str, DeniedIncomeCode> =
        DeniedIncomeCode::ALL.iter().map(|c| (c.as_str(), *c)).collect();
    static ref EXPENDITURE_BY_CODE: HashMap<&'static str, ExpenditureCode> =
        ExpenditureCode::ALL.iter().map(|c| (c.as_str(), *c)).collect();
    static ref REASON_BY_CODE: HashMap<&'static str, ExpenditureReasonCode> =
        ExpenditureReasonCode::ALL.iter().map(|c| (c.as_str(), *c)).collect();
}

impl FromStr for DetailCategory {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CATEGORY_ACTION {
            return Err(DetailError::InvalidCategory(s.to_string()));
        }
        CATEGORY_BY_CODE
            .get(s)
            .copied()
            .ok_or_else(|| DetailError::UnknownCode {
                kind: "detail category",
                code: s.to_string(),
            })
    }
}

impl FromStr for Frequency {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FREQUENCY_BY_CODE
            .get(s)
            .copied()
            .ok_or_else(|| DetailError::UnknownCode {
                kind: "frequency",
                code: s.to_string(),
            })
    }
}

impl FromStr for DeniedIncomeCode {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DENIED_INCOME_BY_CODE
            .get(s)
            .copied()
            .ok_or_else(|| DetailError::UnknownCode {
                kind: "denied income",
                code: s.to_string(),
            })
    }
}

impl FromStr for ExpenditureCode {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EXPENDITURE_BY_CODE
            .get(s)
            .copied()
            .ok_or_else(|| DetailError::UnknownCode {
                kind: "expenditure",
                code: s.to_string(),
            })
    }
}

impl FromStr for ExpenditureReasonCode {
    type Err = DetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REASON_BY_CODE
            .get(s)
            .copied()
            .ok_or_else(|| DetailError::UnknownCode {
                kind: "expenditure reason",
                code: s.to_string(),
            })
    }
}

/// Category-specific item code carried by a detail item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailItemCode {
    DeniedIncome(DeniedIncomeCode),
    Expenditure(ExpenditureCode),
}

/// Solicitor cost figures attached to a review. `estimated_total` is
/// computed-or-cached: derived once from the component figures when absent,
/// then reused as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitorCosts {
    pub rate: Decimal,
    pub hours: u32,
    pub vat: Decimal,
    pub disbursements: Decimal,
    #[serde(default, with = "crate::utils::decimal_serde::decimal_serde_option")]
    pub estimated_total: Option<Decimal>,
}

impl SolicitorCosts {
    /// Returns the estimated total, deriving `rate * hours + vat +
    /// disbursements` and caching it on first use. A populated total is
    /// never recomputed.
    pub fn resolve_estimated_total(&mut self) -> Decimal {
        if let Some(total) = self.estimated_total {
            return total;
        }
        let total = self.rate * Decimal::from(self.hours) + self.vat + self.disbursements;
        self.estimated_total = Some(total);
        total
    }
}

/// Domain model for one declared financial fact, fully defaulted at the
/// parse boundary. Immutable during calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDetailItem {
    pub category: DetailCategory,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<DetailItemCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<ExpenditureReasonCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicitor_costs: Option<SolicitorCosts>,
}

impl FinancialDetailItem {
    /// Annual contribution of this item: `amount * frequency weight`.
    pub fn annualized(&self) -> Decimal {
        self.amount * self.frequency.weight()
    }
}

/// Raw wire form of a detail item as supplied by the case-management
/// system. Every field is optional; defaults are applied exactly once in
/// [`FinancialDetailInput::into_item`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDetailInput {
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub frequency: Option<String>,
    pub accepted: Option<bool>,
    pub item_code: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub reason_code: Option<String>,
    pub rate: Option<Decimal>,
    pub hours: Option<u32>,
    pub vat: Option<Decimal>,
    pub disbursements: Option<Decimal>,
    pub estimated_total: Option<Decimal>,
}

impl FinancialDetailInput {
    /// Resolves code strings and applies the defaulted-field rules:
    /// absent amount counts as zero, absent frequency as annual (weight 1),
    /// absent accepted flag as not accepted.
    pub fn into_item(self) -> crate::errors::Result<FinancialDetailItem> {
        let category_code = self
            .category
            .ok_or_else(|| ValidationError::MissingField("category".to_string()))?;
        let category = DetailCategory::from_str(&category_code)?;

        let frequency = match self.frequency {
            Some(code) => Frequency::from_str(&code)?,
            None => Frequency::Annually,
        };

        let item_code = match (category, self.item_code) {
            (DetailCategory::DeniedIncome, Some(code)) => Some(DetailItemCode::DeniedIncome(
                DeniedIncomeCode::from_str(&code)?,
            )),
            (DetailCategory::ExtraExpenditure, Some(code)) => Some(DetailItemCode::Expenditure(
                ExpenditureCode::from_str(&code)?,
            )),
            _ => None,
        };

        let reason_code = match (category, self.reason_code) {
            (DetailCategory::ExtraExpenditure, Some(code)) => {
                Some(ExpenditureReasonCode::from_str(&code)?)
            }
            _ => None,
        };

        let solicitor_costs = if category == DetailCategory::SolicitorCosts {
            Some(SolicitorCosts {
                rate: self.rate.unwrap_or(Decimal::ZERO),
                hours: self.hours.unwrap_or(0),
                vat: self.vat.unwrap_or(Decimal::ZERO),
                disbursements: self.disbursements.unwrap_or(Decimal::ZERO),
                estimated_total: self.estimated_total,
            })
        } else {
            None
        };

        Ok(FinancialDetailItem {
            category,
            amount: self.amount.unwrap_or(Decimal::ZERO),
            frequency,
            accepted: self.accepted.unwrap_or(false),
            item_code,
            due_date: if category == DetailCategory::OtherFunding {
                self.due_date
            } else {
                None
            },
            reason_code,
            solicitor_costs,
        })
    }
}

/// Output of classification: detail items partitioned by category.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedReview {
    pub denied_income: Vec<FinancialDetailItem>,
    pub extra_expenditure: Vec<FinancialDetailItem>,
    pub other_funding: Vec<FinancialDetailItem>,
    pub solicitor_costs: Option<SolicitorCosts>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn frequency_weights_annualize_correctly() {
        assert_eq!(Frequency::Weekly.weight(), dec!(52));
        assert_eq!(Frequency::TwoWeekly.weight(), dec!(26));
        assert_eq!(Frequency::FourWeekly.weight(), dec!(13));
        assert_eq!(Frequency::Monthly.weight(), dec!(12));
        assert_eq!(Frequency::Annually.weight(), dec!(1));
    }

    #[test]
    fn category_codes_round_trip() {
        for category in DetailCategory::ALL {
            assert_eq!(DetailCategory::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_code_is_typed_error() {
        let err = DetailCategory::from_str("GIBBERISH").unwrap_err();
        assert!(matches!(err, DetailError::UnknownCode { kind: "detail category", .. }));
    }

    #[test]
    fn action_category_is_invalid_not_unknown() {
        let err = DetailCategory::from_str(CATEGORY_ACTION).unwrap_err();
        assert!(matches!(err, DetailError::InvalidCategory(_)));
    }

    #[test]
    fn unknown_frequency_code_is_typed_error() {
        let err = Frequency::from_str("DAILY").unwrap_err();
        assert!(matches!(err, DetailError::UnknownCode { kind: "frequency", .. }));
    }

    #[test]
    fn estimated_total_is_derived_once() {
        let mut costs = SolicitorCosts {
            rate: dec!(10),
            hours: 100,
            vat: dec!(25.50),
            disbursements: dec!(14.50),
            estimated_total: None,
        };
        assert_eq!(costs.resolve_estimated_total(), dec!(1040.00));
        assert_eq!(costs.estimated_total, Some(dec!(1040.00)));

        // Mutating the components afterwards must not change the cached total.
        costs.rate = dec!(999);
        assert_eq!(costs.resolve_estimated_total(), dec!(1040.00));
    }

    #[test]
    fn populated_estimated_total_is_used_as_is() {
        let mut costs = SolicitorCosts {
            rate: dec!(10),
            hours: 100,
            vat: dec!(0),
            disbursements: dec!(0),
            estimated_total: Some(dec!(500)),
        };
        assert_eq!(costs.resolve_estimated_total(), dec!(500));
    }

    #[test]
    fn input_defaults_are_applied_once_at_the_boundary() {
        let item = FinancialDetailInput {
            category: Some(CATEGORY_EXTRA_EXPENDITURE.to_string()),
            ..Default::default()
        }
        .into_item()
        .unwrap();

        assert_eq!(item.amount, Decimal::ZERO);
        assert_eq!(item.frequency, Frequency::Annually);
        assert!(!item.accepted);
        assert_eq!(item.annualized(), Decimal::ZERO);
    }

    #[test]
    fn input_without_category_is_a_validation_error() {
        let err = FinancialDetailInput::default().into_item().unwrap_err();
        assert!(matches!(
            err,
            crate::errors::Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn item_code_is_resolved_per_category() {
        let item = FinancialDetailInput {
            category: Some(CATEGORY_DENIED_INCOME.to_string()),
            amount: Some(dec!(120)),
            frequency: Some(FREQUENCY_MONTHLY.to_string()),
            accepted: Some(true),
            item_code: Some(DENIED_INCOME_MEDICAL_GROUNDS.to_string()),
            ..Default::default()
        }
        .into_item()
        .unwrap();

        assert_eq!(
            item.item_code,
            Some(DetailItemCode::DeniedIncome(DeniedIncomeCode::MedicalGrounds))
        );
        assert_eq!(item.annualized(), dec!(1440));
    }

    #[test]
    fn unknown_item_code_fails_rather_than_coercing() {
        let err = FinancialDetailInput {
            category: Some(CATEGORY_EXTRA_EXPENDITURE.to_string()),
            item_code: Some("NOT_A_CODE".to_string()),
            ..Default::default()
        }
        .into_item()
        .unwrap_err();
        assert!(matches!(err, crate::errors::Error::Detail(DetailError::UnknownCode { .. })));
    }
}
