use async_trait::async_trait;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashSet;
use std::sync::Arc;

use super::hardship_model::{
    CourtType, HardshipResult, HardshipReviewRequest, HardshipReviewResult,
};
use super::hardship_traits::{HardshipServiceTrait, ThresholdLookupTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::details::{DetailAggregatorTrait, DetailCategory, DetailItemLookupTrait};
use crate::errors::{Result, ValidationError};
use crate::utils::Clock;

pub struct HardshipService {
    aggregator: Arc<dyn DetailAggregatorTrait>,
    detail_lookup: Arc<dyn DetailItemLookupTrait>,
    threshold_lookup: Arc<dyn ThresholdLookupTrait>,
    clock: Arc<dyn Clock>,
}

impl HardshipService {
    pub fn new(
        aggregator: Arc<dyn DetailAggregatorTrait>,
        detail_lookup: Arc<dyn DetailItemLookupTrait>,
        threshold_lookup: Arc<dyn ThresholdLookupTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        HardshipService {
            aggregator,
            detail_lookup,
            threshold_lookup,
            clock,
        }
    }

    fn contributing_categories() -> HashSet<DetailCategory> {
        HashSet::from([
            DetailCategory::DeniedIncome,
            DetailCategory::ExtraExpenditure,
        ])
    }
}

#[async_trait]
impl HardshipServiceTrait for HardshipService {
    fn calculate_hardship(
        &self,
        review: &mut HardshipReviewRequest,
        full_threshold: Decimal,
    ) -> Result<HardshipResult> {
        let disposable_income = review.total_annual_disposable_income.ok_or_else(|| {
            ValidationError::MissingField("totalAnnualDisposableIncome".to_string())
        })?;

        let categories = Self::contributing_categories();
        let mut details_total = self
            .aggregator
            .sum_accepted_by_category(Some(&review.denied_income), &categories)
            + self
                .aggregator
                .sum_accepted_by_category(Some(&review.extra_expenditure), &categories);

        // Solicitor costs count only in the magistrates' court, and are not
        // gated by the accepted flag. The derived total is written back onto
        // the request so a second read reuses it instead of recomputing.
        if review.court_type == Some(CourtType::Magistrate) {
            if let Some(costs) = review.solicitor_costs.as_mut() {
                details_total += costs.resolve_estimated_total();
            }
        }

        let post_hardship = (disposable_income - details_total).round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );

        // Equality with the threshold passes.
        let review_result = if post_hardship <= full_threshold {
            HardshipReviewResult::Pass
        } else {
            HardshipReviewResult::Fail
        };

        debug!(
            "Hardship calculation: deductions {}, post-hardship disposable income {}, threshold {}, result {:?}",
            details_total, post_hardship, full_threshold, review_result
        );

        Ok(HardshipResult {
            review_result,
            result_date: self.clock.today(),
            post_hardship_disposable_income: post_hardship,
        })
    }

    async fn calculate_for_detail_type(
        &self,
        case_reference: i64,
        detail_type: DetailCategory,
    ) -> Result<Decimal> {
        let items = match self.detail_lookup.fetch(case_reference, detail_type).await? {
            Some(items) => items,
            None => {
                debug!(
                    "No {} details held for case reference {}",
                    detail_type.as_str(),
                    case_reference
                );
                return Ok(Decimal::ZERO);
            }
        };

        let classified = self.aggregator.classify(&items)?;
        let categories = Self::contributing_categories();
        let summary = self
            .aggregator
            .sum_accepted_by_category(Some(&classified.denied_income), &categories)
            + self
                .aggregator
                .sum_accepted_by_category(Some(&classified.extra_expenditure), &categories);

        Ok(summary)
    }

    async fn review_hardship(&self, review: &mut HardshipReviewRequest) -> Result<HardshipResult> {
        let full_threshold = self.threshold_lookup.find(review.review_date).await?;
        self.calculate_hardship(review, full_threshold)
    }
}
