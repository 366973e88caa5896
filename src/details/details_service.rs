use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashSet;

use super::details_errors::DetailError;
use super::details_model::{ClassifiedReview, DetailCategory, FinancialDetailItem};
use super::details_traits::DetailAggregatorTrait;
use crate::errors::Result;

/// Stateless classifier and summer over financial detail items. Pure
/// transformation; safe to share across calculation requests.
#[derive(Debug, Default, Clone)]
pub struct DetailAggregatorService;

impl DetailAggregatorService {
    pub fn new() -> Self {
        DetailAggregatorService
    }
}

impl DetailAggregatorTrait for DetailAggregatorService {
    fn classify(&self, items: &[FinancialDetailItem]) -> Result<ClassifiedReview> {
        let mut classified = ClassifiedReview::default();

        for item in items {
            match item.category {
                DetailCategory::DeniedIncome => classified.denied_income.push(item.clone()),
                DetailCategory::ExtraExpenditure => {
                    classified.extra_expenditure.push(item.clone())
                }
                DetailCategory::OtherFunding => classified.other_funding.push(item.clone()),
                DetailCategory::SolicitorCosts => {
                    if classified.solicitor_costs.is_some() {
                        return Err(DetailError::DuplicateSolicitorCosts.into());
                    }
                    classified.solicitor_costs =
                        Some(item.solicitor_costs.clone().unwrap_or_default());
                }
            }
        }

        debug!(
            "Classified {} detail items: {} denied income, {} extra expenditure, {} other funding, solicitor costs: {}",
            items.len(),
            classified.denied_income.len(),
            classified.extra_expenditure.len(),
            classified.other_funding.len(),
            classified.solicitor_costs.is_some()
        );

        Ok(classified)
    }

    fn sum_accepted_by_category(
        &self,
        items: Option<&[FinancialDetailItem]>,
        categories: &HashSet<DetailCategory>,
    ) -> Decimal {
        let items = match items {
            Some(items) if !items.is_empty() => items,
            // Absent or empty detail list is a defined zero result.
            _ => return Decimal::zero(),
        };

        items
            .iter()
            .filter(|item| item.accepted && categories.contains(&item.category))
            .fold(Decimal::zero(), |total, item| total + item.annualized())
    }
}
