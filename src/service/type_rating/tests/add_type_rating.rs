use super::*;
use crate::service::type_rating::rescale_career_minutes;

/// Expect a switch from 1000 career minutes with divisor 2 to leave 500, written as one
/// TypeRatingChange entry of -500
#[tokio::test]
async fn switch_applies_divisor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 2.0)
        .build()
        .await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    let boeing = test.type_rating().insert_type_rating("B737").await?;
    test.type_rating().grant_to_user(pilot.id, airbus.id).await?;
    test.ledger().insert_career_minutes(pilot.id, 1000).await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Single);
    let result = type_rating_service
        .add_type_rating(pilot.id, boeing.id)
        .await;

    assert!(matches!(
        result,
        Ok(TypeRatingOutcome::Switched { adjustment: -500 })
    ));

    let ledger = LedgerService::new(&test.db);
    assert_eq!(ledger.career_minutes(pilot.id).await.unwrap(), 500);

    let adjustments: Vec<_> = ledger
        .history(pilot.id)
        .await
        .unwrap()
        .into_iter()
        .filter(|entry| entry.source_type == FlightTimeSourceType::TypeRatingChange)
        .collect();
    assert_eq!(adjustments.len(), 1);
    assert_eq!(adjustments[0].minutes, -500);
    assert_eq!(adjustments[0].category, FlightTimeCategory::Career);
    assert_eq!(
        adjustments[0].note.as_deref(),
        Some("Type rating switch divisor applied (x2)")
    );

    let held = TypeRatingRepository::new(&test.db).get_held(pilot.id).await?;
    assert_eq!(held.type_rating_ids, vec![boeing.id]);

    Ok(())
}

/// Expect no ledger entry when the divisor leaves career minutes unchanged
#[tokio::test]
async fn switch_with_unit_divisor_writes_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 0.0)
        .build()
        .await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    let boeing = test.type_rating().insert_type_rating("B737").await?;
    test.type_rating().grant_to_user(pilot.id, airbus.id).await?;
    test.ledger().insert_career_minutes(pilot.id, 700).await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Single);
    let result = type_rating_service
        .add_type_rating(pilot.id, boeing.id)
        .await;

    assert!(matches!(
        result,
        Ok(TypeRatingOutcome::Switched { adjustment: 0 })
    ));
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

/// Expect a first rating under the single policy to be added without adjustment
#[tokio::test]
async fn first_rating_is_added_under_single_policy() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 2.0)
        .build()
        .await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    test.ledger().insert_career_minutes(pilot.id, 1000).await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Single);
    let result = type_rating_service
        .add_type_rating(pilot.id, airbus.id)
        .await;

    assert!(matches!(result, Ok(TypeRatingOutcome::Added)));
    assert_eq!(
        LedgerService::new(&test.db)
            .career_minutes(pilot.id)
            .await
            .unwrap(),
        1000
    );

    Ok(())
}

/// Expect additional ratings under the multiple policy with no ledger effect
#[tokio::test]
async fn multiple_policy_adds_without_adjustment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_logbook_tables()
        .with_airline(true, 2.0)
        .build()
        .await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    let boeing = test.type_rating().insert_type_rating("B737").await?;
    test.type_rating().grant_to_user(pilot.id, airbus.id).await?;
    test.ledger().insert_career_minutes(pilot.id, 1000).await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Multiple);
    let result = type_rating_service
        .add_type_rating(pilot.id, boeing.id)
        .await;

    assert!(matches!(result, Ok(TypeRatingOutcome::Added)));

    let held = TypeRatingRepository::new(&test.db).get_held(pilot.id).await?;
    assert_eq!(held.type_rating_ids, vec![airbus.id, boeing.id]);
    assert_eq!(
        LedgerService::new(&test.db)
            .career_minutes(pilot.id)
            .await
            .unwrap(),
        1000
    );

    Ok(())
}

/// Expect Error when the rating is already held, under either policy
#[tokio::test]
async fn fails_for_rating_already_held() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;
    test.type_rating().grant_to_user(pilot.id, airbus.id).await?;

    for policy in [TypeRatingPolicy::Single, TypeRatingPolicy::Multiple] {
        let type_rating_service = TypeRatingService::new(&test.db, policy);
        let result = type_rating_service
            .add_type_rating(pilot.id, airbus.id)
            .await;

        assert!(matches!(
            result,
            Err(Error::TypeRatingError(TypeRatingError::AlreadyHeld { .. }))
        ));
    }

    Ok(())
}

/// Expect Error for an unknown user or type rating
#[tokio::test]
async fn fails_for_unknown_records() -> Result<(), TestError> {
    let test = TestBuilder::new().with_logbook_tables().build().await?;
    let pilot = test.user().insert_user("Pilot").await?;
    let airbus = test.type_rating().insert_type_rating("A32F").await?;

    let type_rating_service = TypeRatingService::new(&test.db, TypeRatingPolicy::Multiple);

    let result = type_rating_service.add_type_rating(99, airbus.id).await;
    assert!(matches!(
        result,
        Err(Error::TypeRatingError(TypeRatingError::UserNotFound(99)))
    ));

    let result = type_rating_service.add_type_rating(pilot.id, 98).await;
    assert!(matches!(
        result,
        Err(Error::TypeRatingError(TypeRatingError::NotFound(98)))
    ));

    Ok(())
}

#[test]
fn rescales_half_up() {
    assert_eq!(rescale_career_minutes(1000, 2.0), 500);
    assert_eq!(rescale_career_minutes(999, 2.0), 500);
    assert_eq!(rescale_career_minutes(100, 3.0), 33);
    assert_eq!(rescale_career_minutes(0, 4.0), 0);
}
