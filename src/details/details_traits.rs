use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;

use super::details_model::{ClassifiedReview, DetailCategory, FinancialDetailItem};
use crate::errors::Result;

/// Trait defining the contract for detail aggregation operations.
pub trait DetailAggregatorTrait: Send + Sync {
    fn classify(&self, items: &[FinancialDetailItem]) -> Result<ClassifiedReview>;
    fn sum_accepted_by_category(
        &self,
        items: Option<&[FinancialDetailItem]>,
        categories: &HashSet<DetailCategory>,
    ) -> Decimal;
}

/// Trait defining the contract for fetching financial detail items from
/// the case-management system. `Ok(None)` means no data held for the case
/// reference, which is a defined zero-result case for the caller.
#[async_trait]
pub trait DetailItemLookupTrait: Send + Sync {
    async fn fetch(
        &self,
        case_reference: i64,
        detail_type: DetailCategory,
    ) -> Result<Option<Vec<FinancialDetailItem>>>;
}
