pub(crate) mod hardship_model;
pub(crate) mod hardship_service;
pub(crate) mod hardship_traits;


pub use hardship_model::{
    CourtType, HardshipResult, HardshipReviewRequest, HardshipReviewResult,
    COURT_TYPE_CROWN_COURT, COURT_TYPE_MAGISTRATE,
};
pub use hardship_service::HardshipService;
pub use hardship_traits::{HardshipServiceTrait, ThresholdLookupTrait};
