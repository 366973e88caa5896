use async_trait::async_trait;
use chrono::NaiveDate;
use hardship_core::errors::Result;
use hardship_core::utils::Clock;
use hardship_core::{
    CourtType, DetailAggregatorService, DetailCategory, DetailItemLookupTrait,
    FinancialDetailInput, FinancialDetailItem, HardshipReviewRequest, HardshipReviewResult,
    HardshipService, HardshipServiceTrait, SolicitorCosts, ThresholdLookupTrait,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

// In-memory collaborators standing in for the case-management store and
// the means-assessment threshold service.

struct InMemoryDetailStore {
    records: HashMap<(i64, DetailCategory), Vec<FinancialDetailItem>>,
}

#[async_trait]
impl DetailItemLookupTrait for InMemoryDetailStore {
    async fn fetch(
        &self,
        case_reference: i64,
        detail_type: DetailCategory,
    ) -> Result<Option<Vec<FinancialDetailItem>>> {
        Ok(self.records.get(&(case_reference, detail_type)).cloned())
    }
}

struct StaticThresholdLookup {
    thresholds: HashMap<NaiveDate, Decimal>,
}

#[async_trait]
impl ThresholdLookupTrait for StaticThresholdLookup {
    async fn find(&self, date: NaiveDate) -> Result<Decimal> {
        Ok(self.thresholds.get(&date).copied().unwrap_or(dec!(3000)))
    }
}

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn review_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, 14).unwrap()
}

fn wire_item(category: &str, amount: Decimal, frequency: &str, accepted: bool) -> FinancialDetailItem {
    FinancialDetailInput {
        category: Some(category.to_string()),
        amount: Some(amount),
        frequency: Some(frequency.to_string()),
        accepted: Some(accepted),
        ..Default::default()
    }
    .into_item()
    .unwrap()
}

fn build_service(records: HashMap<(i64, DetailCategory), Vec<FinancialDetailItem>>) -> HardshipService {
    let mut thresholds = HashMap::new();
    thresholds.insert(review_date(), dec!(3000));

    HardshipService::new(
        Arc::new(DetailAggregatorService::new()),
        Arc::new(InMemoryDetailStore { records }),
        Arc::new(StaticThresholdLookup { thresholds }),
        Arc::new(FixedClock(review_date())),
    )
}

#[tokio::test]
async fn full_review_combines_details_costs_and_threshold() {
    let service = build_service(HashMap::new());

    let mut review = HardshipReviewRequest {
        court_type: Some(CourtType::Magistrate),
        total_annual_disposable_income: Some(dec!(12000)),
        solicitor_costs: Some(SolicitorCosts {
            rate: dec!(45.50),
            hours: 20,
            vat: dec!(182),
            disbursements: dec!(90),
            estimated_total: None,
        }),
        denied_income: vec![wire_item("INCOME", dec!(85), "WEEKLY", true)],
        extra_expenditure: vec![
            wire_item("EXPENDITURE", dec!(120), "MONTHLY", true),
            wire_item("EXPENDITURE", dec!(300), "MONTHLY", false),
        ],
        review_date: review_date(),
    };

    let result = service.review_hardship(&mut review).await.unwrap();

    // 85*52 + 120*12 + (45.50*20 + 182 + 90) = 4420 + 1440 + 1182 = 7042
    assert_eq!(result.post_hardship_disposable_income, dec!(4958.00));
    assert_eq!(result.review_result, HardshipReviewResult::Fail);
    assert_eq!(result.result_date, review_date());
    assert_eq!(
        review.solicitor_costs.as_ref().unwrap().estimated_total,
        Some(dec!(1182.00))
    );
}

#[tokio::test]
async fn detail_type_summary_reads_the_store() {
    let mut records = HashMap::new();
    records.insert(
        (9876, DetailCategory::ExtraExpenditure),
        vec![
            wire_item("EXPENDITURE", dec!(160), "WEEKLY", true),
            wire_item("EXPENDITURE", dec!(75), "WEEKLY", false),
        ],
    );
    let service = build_service(records);

    let summary = service
        .calculate_for_detail_type(9876, DetailCategory::ExtraExpenditure)
        .await
        .unwrap();
    assert_eq!(summary, dec!(8320));
}

#[tokio::test]
async fn detail_type_summary_is_zero_for_unknown_case() {
    let service = build_service(HashMap::new());

    let summary = service
        .calculate_for_detail_type(1, DetailCategory::DeniedIncome)
        .await
        .unwrap();
    assert_eq!(summary, Decimal::ZERO);
}
