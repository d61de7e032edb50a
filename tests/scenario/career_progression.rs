use entity::sea_orm_active_enums::PirepStatus;
use logbook::{
    model::{
        role::{Actor, RoleSet},
        settings::TypeRatingPolicy,
    },
    service::{
        eligibility::EligibilityResolver, ledger::LedgerService, pirep::PirepService,
        rankup::RankupTrigger, type_rating::TypeRatingService,
    },
};
use logbook_test_utils::prelude::*;
use tokio::sync::mpsc;

/// Expect the career sum to track approvals and reversals, and a rating switch to halve it
#[tokio::test]
async fn approvals_reversals_and_rating_switch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 2.0)
        .build()
        .await?;
    let staff = test.user().insert_user_with_roles("Staff", "admin").await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let a320 = test.fleet().insert_aircraft("A320").await?;
    let b738 = test.fleet().insert_aircraft("B738").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    let boeing = test.type_rating().insert_type_rating("B737").await?;
    test.type_rating().assign_aircraft(airbus.id, a320.id).await?;
    test.type_rating().assign_aircraft(boeing.id, b738.id).await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Single);
    type_rating_service
        .add_type_rating(pilot.id, airbus.id)
        .await
        .unwrap();

    let eligibility = EligibilityResolver::new(&test.db);
    let allowed: Vec<i32> = eligibility
        .allowed_aircraft_for_user(pilot.id)
        .await
        .unwrap()
        .into_iter()
        .map(|aircraft| aircraft.id)
        .collect();
    assert_eq!(allowed, vec![a320.id]);

    let mut pirep_ids = Vec::new();
    for flight_time in [200, 300, 500, 100] {
        let pirep = test
            .pirep()
            .insert_pending_pirep(pilot.id, Some(a320.id), flight_time)
            .await?;
        pirep_ids.push(pirep.id);
    }

    let (sender, _receiver) = mpsc::unbounded_channel();
    let rankup = RankupTrigger::new(test.db.clone(), sender);
    let pirep_service = PirepService::new(&test.db, &rankup);
    let staff_actor = Actor::new(staff.id, RoleSet::parse("admin"));

    pirep_service
        .bulk_approve(&staff_actor, &pirep_ids)
        .await
        .unwrap();

    let ledger = LedgerService::new(&test.db);
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), 1100);

    // Reverse the last one: the remaining approvals sum to 1000
    pirep_service
        .set_pirep_status(&staff_actor, pirep_ids[3], PirepStatus::Pending, None)
        .await
        .unwrap();
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), 1000);

    type_rating_service
        .add_type_rating(pilot.id, boeing.id)
        .await
        .unwrap();
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), 500);

    let admin_allowed = eligibility
        .allowed_aircraft_for_user(staff.id)
        .await
        .unwrap();
    assert_eq!(admin_allowed.len(), 2);

    Ok(())
}
