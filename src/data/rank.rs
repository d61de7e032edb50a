use std::collections::BTreeSet;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::db::RankModel;

pub struct RankRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RankRepository<'a, C> {
    /// Creates a new instance of [`RankRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, rank_id: i32) -> Result<Option<RankModel>, DbErr> {
        entity::prelude::Rank::find_by_id(rank_id).one(self.db).await
    }

    /// All ranks ordered by minimum flight time.
    pub async fn get_all(&self) -> Result<Vec<RankModel>, DbErr> {
        entity::prelude::Rank::find()
            .order_by_asc(entity::rank::Column::MinimumFlightTime)
            .order_by_asc(entity::rank::Column::Id)
            .all(self.db)
            .await
    }

    /// IDs of aircraft directly assigned to any of the given ranks, without duplicates.
    pub async fn get_aircraft_ids_for_ranks(&self, rank_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if rank_ids.is_empty() {
            return Ok(Vec::new());
        }

        let assignments = entity::prelude::RankAircraft::find()
            .filter(entity::rank_aircraft::Column::RankId.is_in(rank_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.aircraft_id)
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect())
    }

    /// IDs of every rank whose minimum flight time is at or below `minimum_flight_time`.
    pub async fn get_ids_at_or_below(&self, minimum_flight_time: i32) -> Result<Vec<i32>, DbErr> {
        let ranks = entity::prelude::Rank::find()
            .filter(entity::rank::Column::MinimumFlightTime.lte(minimum_flight_time))
            .all(self.db)
            .await?;

        Ok(ranks.into_iter().map(|rank| rank.id).collect())
    }
}

#[cfg(test)]
mod tests {

    mod get_ids_at_or_below {
        use logbook_test_utils::prelude::*;

        use crate::data::rank::RankRepository;

        /// Expect ranks with a lower or equal minimum, excluding higher ones
        #[tokio::test]
        async fn includes_lower_and_equal_ranks() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let cadet = test.rank().insert_rank("Cadet", 0, Some(599), false).await?;
            let first_officer = test
                .rank()
                .insert_rank("First Officer", 600, Some(2999), false)
                .await?;
            test.rank().insert_rank("Captain", 3000, None, false).await?;

            let rank_repo = RankRepository::new(&test.db);
            let mut result = rank_repo.get_ids_at_or_below(600).await?;
            result.sort();

            assert_eq!(result, vec![cadet.id, first_officer.id]);

            Ok(())
        }
    }

    mod get_aircraft_ids_for_ranks {
        use logbook_test_utils::prelude::*;

        use crate::data::rank::RankRepository;

        /// Expect aircraft shared by two ranks to appear once
        #[tokio::test]
        async fn deduplicates_shared_aircraft() -> Result<(), TestError> {
            let test = TestBuilder::new().with_logbook_tables().build().await?;
            let cadet = test.rank().insert_rank("Cadet", 0, Some(599), false).await?;
            let captain = test.rank().insert_rank("Captain", 600, None, false).await?;
            let a320 = test.fleet().insert_aircraft("A320").await?;
            let b738 = test.fleet().insert_aircraft("B738").await?;
            test.rank().assign_aircraft(cadet.id, a320.id).await?;
            test.rank().assign_aircraft(captain.id, a320.id).await?;
            test.rank().assign_aircraft(captain.id, b738.id).await?;

            let rank_repo = RankRepository::new(&test.db);
            let result = rank_repo
                .get_aircraft_ids_for_ranks(&[cadet.id, captain.id])
                .await?;

            assert_eq!(result, vec![a320.id, b738.id]);

            Ok(())
        }
    }
}
