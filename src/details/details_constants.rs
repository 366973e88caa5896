// Detail category codes as stored by the case-management system
pub const CATEGORY_DENIED_INCOME: &str = "INCOME";
pub const CATEGORY_EXTRA_EXPENDITURE: &str = "EXPENDITURE";
pub const CATEGORY_OTHER_FUNDING: &str = "FUNDING";
pub const CATEGORY_SOLICITOR_COSTS: &str = "SOLICITOR_COSTS";

/// Progress-tracking category. Valid in the wider case-management system
/// but never in a hardship calculation.
pub const CATEGORY_ACTION: &str = "ACTION";

// Frequency codes
pub const FREQUENCY_WEEKLY: &str = "WEEKLY";
pub const FREQUENCY_TWO_WEEKLY: &str = "2WEEKLY";
pub const FREQUENCY_FOUR_WEEKLY: &str = "4WEEKLY";
pub const FREQUENCY_MONTHLY: &str = "MONTHLY";
pub const FREQUENCY_ANNUALLY: &str = "ANNUALLY";

// Denied-income reason codes
pub const DENIED_INCOME_MEDICAL_GROUNDS: &str = "MEDICAL_GROUNDS";
pub const DENIED_INCOME_SUSPENDED: &str = "SUSPENDED";
pub const DENIED_INCOME_SELF_EMPLOYED: &str = "SELF_EMPLOYED";
pub const DENIED_INCOME_OTHER: &str = "OTHER_INC";

// Extra-expenditure item codes
pub const EXPENDITURE_CHILDCARE: &str = "CHILDCARE";
pub const EXPENDITURE_DEBTS: &str = "DEBTS";
pub const EXPENDITURE_MEDICAL: &str = "MEDICAL";
pub const EXPENDITURE_TRAVEL: &str = "TRAVEL";
pub const EXPENDITURE_OTHER: &str = "OTHER_EXP";

// Expenditure reason codes
pub const REASON_ALLOWED: &str = "ALLOWED";
pub const REASON_ESSENTIAL: &str = "ESSENTIAL";
pub const REASON_EVIDENCED: &str = "EVIDENCED";
