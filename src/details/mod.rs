pub(crate) mod details_constants;
pub(crate) mod details_errors;
pub(crate) mod details_model;
pub(crate) mod details_service;
pub(crate) mod details_traits;

pub use details_constants::*;
pub use details_errors::DetailError;
pub use details_model::{
    ClassifiedReview, DeniedIncomeCode, DetailCategory, DetailItemCode, ExpenditureCode,
    ExpenditureReasonCode, FinancialDetailInput, FinancialDetailItem, Frequency, SolicitorCosts,
};
pub use details_service::DetailAggregatorService;
pub use details_traits::{DetailAggregatorTrait, DetailItemLookupTrait};
