mod add_type_rating;
mod remove_type_rating;

use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType};
use logbook_test_utils::prelude::*;

use crate::{
    data::type_rating::TypeRatingRepository,
    error::{type_rating::TypeRatingError, Error},
    model::{settings::TypeRatingPolicy, type_rating::TypeRatingOutcome},
    service::{ledger::LedgerService, type_rating::TypeRatingService},
};
