use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::hardship_model::{HardshipResult, HardshipReviewRequest};
use crate::details::DetailCategory;
use crate::errors::Result;

/// Trait defining the contract for the means-assessment threshold
/// service: the full-assessment disposable-income ceiling in force on a
/// given date.
#[async_trait]
pub trait ThresholdLookupTrait: Send + Sync {
    async fn find(&self, date: NaiveDate) -> Result<Decimal>;
}

/// Trait defining the contract for hardship review operations.
#[async_trait]
pub trait HardshipServiceTrait: Send + Sync {
    fn calculate_hardship(
        &self,
        review: &mut HardshipReviewRequest,
        full_threshold: Decimal,
    ) -> Result<HardshipResult>;
    async fn calculate_for_detail_type(
        &self,
        case_reference: i64,
        detail_type: DetailCategory,
    ) -> Result<Decimal>;
    async fn review_hardship(&self, review: &mut HardshipReviewRequest) -> Result<HardshipResult>;
}
