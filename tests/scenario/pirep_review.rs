use std::time::Duration;

use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType, PirepStatus};
use logbook::{
    model::{
        pirep::NewPirep,
        role::{Actor, RoleSet},
    },
    service::{ledger::LedgerService, pirep::PirepService, rankup::RankupTrigger},
};
use logbook_test_utils::prelude::*;
use tokio::sync::mpsc;

/// Expect a rated flight to add career minutes on approval, notify a rankup, and give the
/// minutes back when the PIREP is later denied
#[tokio::test]
async fn approve_then_deny_restores_career_minutes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 1.0)
        .build()
        .await?;
    let staff = test.user().insert_user_with_roles("Staff", "member,pireps").await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let a320 = test.fleet().insert_aircraft("A320").await?;
    let rating = test.type_rating().insert_type_rating("A32F").await?;
    test.type_rating().assign_aircraft(rating.id, a320.id).await?;
    test.type_rating().grant_to_user(pilot.id, rating.id).await?;
    let cadet = test.rank().insert_rank("Cadet", 0, Some(299), false).await?;
    let officer = test.rank().insert_rank("First Officer", 300, None, false).await?;
    test.rank().assign_aircraft(cadet.id, a320.id).await?;
    test.ledger().insert_career_minutes(pilot.id, 240).await?;

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let rankup = RankupTrigger::new(test.db.clone(), sender);
    let pirep_service = PirepService::new(&test.db, &rankup);
    let ledger = LedgerService::new(&test.db);

    let pilot_actor = Actor::new(pilot.id, RoleSet::parse("member"));
    let staff_actor = Actor::new(staff.id, RoleSet::parse("member,pireps"));

    let previous = ledger.career_minutes(pilot.id).await.unwrap();
    assert_eq!(previous, 240);

    let pirep = pirep_service
        .submit_pirep(
            &pilot_actor,
            NewPirep {
                aircraft_id: Some(a320.id),
                flight_time: 120,
            },
        )
        .await
        .unwrap();
    assert_eq!(pirep.status, PirepStatus::Pending);

    pirep_service
        .set_pirep_status(&staff_actor, pirep.id, PirepStatus::Approved, None)
        .await
        .unwrap();

    let history = ledger.history(pilot.id).await.unwrap();
    let booked = history.last().unwrap();
    assert_eq!(booked.minutes, 120);
    assert_eq!(booked.category, FlightTimeCategory::Career);
    assert_eq!(booked.source_type, FlightTimeSourceType::Pirep);
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), previous + 120);

    let notification = tokio::time::timeout(Duration::from_secs(5), receiver.recv())
        .await
        .expect("rankup notification not received")
        .expect("channel closed");
    assert_eq!(notification.user_id, pilot.id);
    assert_eq!(notification.previous_minutes, previous);
    assert_eq!(notification.new_minutes, previous + 120);
    assert_eq!(notification.previous_rank_id, Some(cadet.id));
    assert_eq!(notification.new_rank_id, officer.id);

    let denied = pirep_service
        .set_pirep_status(
            &staff_actor,
            pirep.id,
            PirepStatus::Denied,
            Some("insufficient documentation".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(
        denied.denied_reason.as_deref(),
        Some("insufficient documentation")
    );

    let history = ledger.history(pilot.id).await.unwrap();
    let reversal = history.last().unwrap();
    assert_eq!(reversal.minutes, -120);
    assert_eq!(reversal.category, FlightTimeCategory::Career);
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), previous);
    assert_eq!(ledger.pirep_balance(pirep.id).await.unwrap(), 0);

    Ok(())
}
