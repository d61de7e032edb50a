pub mod category;
pub mod eligibility;
pub mod ledger;
pub mod pirep;
pub mod rankup;
pub mod retry;
pub mod type_rating;
