use super::*;

/// Expect the relation removed with no ledger effect
#[tokio::test]
async fn removes_held_rating() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    test.type_rating().grant_to_user(pilot.id, airbus.id).await?;
    test.ledger().insert_career_minutes(pilot.id, 400).await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Single);
    let result = type_rating_service
        .remove_type_rating(pilot.id, airbus.id)
        .await;

    assert!(matches!(result, Ok(TypeRatingOutcome::Removed)));
    assert!(TypeRatingRepository::new(&test.db)
        .get_held(pilot.id)
        .await?
        .is_empty());
    assert_eq!(
        LedgerService::new(&test.db)
            .history(pilot.id)
            .await
            .unwrap()
            .len(),
        1
    );

    Ok(())
}

/// Expect an already removed outcome and no mutation when the relation is absent
#[tokio::test]
async fn reports_already_removed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Multiple);
    let outcome = type_rating_service
        .remove_type_rating(pilot.id, airbus.id)
        .await
        .unwrap();

    assert_eq!(outcome, TypeRatingOutcome::AlreadyRemoved);
    assert_eq!(outcome.message(), "Type rating already removed");

    Ok(())
}
