mod bulk_approve;

use entity::sea_orm_active_enums::{FlightTimeCategory, PirepStatus};
use logbook_test_utils::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::{
    error::{pirep::PirepError, Error, ErrorKind},
    model::{
        rankup::RankupNotification,
        role::{Actor, RoleSet},
    },
    service::{ledger::LedgerService, pirep::PirepService, rankup::RankupTrigger},
};

/// Rankup trigger wired to a channel the test can inspect.
fn rankup_trigger(test: &TestContext) -> (RankupTrigger, UnboundedReceiver<RankupNotification>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (RankupTrigger::new(test.db.clone(), sender), receiver)
}

fn reviewer(user_id: i32) -> Actor {
    Actor::new(user_id, RoleSet::parse("member,pireps"))
}

fn member(user_id: i32) -> Actor {
    Actor::new(user_id, RoleSet::parse("member"))
}
