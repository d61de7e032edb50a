use super::*;

/// Expect every PIREP approved and the career sum to grow by the sum of their flight times
#[tokio::test]
async fn approves_batch_and_books_each() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 1.0)
        .build()
        .await?;
    let staff = test.user().insert_user_with_roles("Staff", "pireps").await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let a320 = test.fleet().insert_aircraft("A320").await?;
    let rating = test.type_rating().insert_type_rating("A32F").await?;
    test.type_rating().assign_aircraft(rating.id, a320.id).await?;
    test.type_rating().grant_to_user(pilot.id, rating.id).await?;

    let mut ids = Vec::new();
    for flight_time in [30, 45, 90] {
        let pirep = test
            .pirep()
            .insert_pending_pirep(pilot.id, Some(a320.id), flight_time)
            .await?;
        ids.push(pirep.id);
    }

    let (rankup, _receiver) = rankup_trigger(&test);
    let pirep_service = PirepService::new(&test.db, &rankup);
    let approved = pirep_service
        .bulk_approve(&reviewer(staff.id), &ids)
        .await
        .unwrap();

    assert_eq!(approved.len(), 3);
    assert!(approved.iter().all(|p| p.status == PirepStatus::Approved));

    let ledger = LedgerService::new(&test.db);
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), 165);
    assert_eq!(ledger.history(pilot.id).await.unwrap().len(), 3);
    for id in &ids {
        assert_eq!(pirep_service.pirep_events(*id).await.unwrap().len(), 1);
    }

    Ok(())
}

/// Expect already approved PIREPs in a batch not to be booked twice
#[tokio::test]
async fn skips_booking_for_already_approved() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let staff = test.user().insert_user_with_roles("Staff", "pireps").await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let pending = test.pirep().insert_pending_pirep(pilot.id, None, 40).await?;
    let approved = test
        .pirep()
        .insert_pirep(pilot.id, None, 60, PirepStatus::Approved)
        .await?;
    test.ledger()
        .insert_entry(
            pilot.id,
            60,
            FlightTimeCategory::FreeFly,
            entity::sea_orm_active_enums::FlightTimeSourceType::Pirep,
            Some(approved.id),
        )
        .await?;

    let (rankup, _receiver) = rankup_trigger(&test);
    let pirep_service = PirepService::new(&test.db, &rankup);
    pirep_service
        .bulk_approve(&reviewer(staff.id), &[pending.id, approved.id, pending.id])
        .await
        .unwrap();

    let ledger = LedgerService::new(&test.db);
    assert_eq!(ledger.free_fly_minutes(pilot.id).await.unwrap(), 100);
    assert_eq!(ledger.pirep_balance(approved.id).await.unwrap(), 60);
    assert_eq!(ledger.pirep_balance(pending.id).await.unwrap(), 40);

    Ok(())
}

/// Expect Error listing the missing IDs and nothing applied
#[tokio::test]
async fn fails_when_any_id_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let staff = test.user().insert_user_with_roles("Staff", "pireps").await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let pirep = test.pirep().insert_pending_pirep(pilot.id, None, 40).await?;

    let (rankup, _receiver) = rankup_trigger(&test);
    let pirep_service = PirepService::new(&test.db, &rankup);
    let result = pirep_service
        .bulk_approve(&reviewer(staff.id), &[pirep.id, 900, 901])
        .await;

    assert!(matches!(
        &result,
        Err(Error::PirepError(PirepError::BatchNotFound(missing))) if missing == &vec![900, 901]
    ));

    assert_eq!(
        LedgerService::new(&test.db)
            .total_minutes(pilot.id)
            .await
            .unwrap(),
        0
    );
    assert!(pirep_service.pirep_events(pirep.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect Error for an empty batch
#[tokio::test]
async fn fails_for_empty_batch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let staff = test.user().insert_user_with_roles("Staff", "pireps").await?;

    let (rankup, _receiver) = rankup_trigger(&test);
    let pirep_service = PirepService::new(&test.db, &rankup);
    let result = pirep_service.bulk_approve(&reviewer(staff.id), &[]).await;

    assert!(matches!(
        result,
        Err(Error::PirepError(PirepError::EmptyBatch))
    ));

    Ok(())
}

/// Expect Error when the actor lacks the Pireps role
#[tokio::test]
async fn fails_for_member() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let pirep = test.pirep().insert_pending_pirep(pilot.id, None, 40).await?;

    let (rankup, _receiver) = rankup_trigger(&test);
    let pirep_service = PirepService::new(&test.db, &rankup);
    let result = pirep_service
        .bulk_approve(&member(pilot.id), &[pirep.id])
        .await;

    assert!(matches!(
        result,
        Err(Error::PirepError(PirepError::StatusChangeNotPermitted(_)))
    ));

    Ok(())
}
