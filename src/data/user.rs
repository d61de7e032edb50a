use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

use crate::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Get a user and hold a row lock until the surrounding transaction ends.
    ///
    /// Used to serialise type rating changes for one pilot.
    pub async fn get_for_update(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get {
        use logbook_test_utils::prelude::*;

        use crate::data::user::UserRepository;

        /// Expect Ok(Some(_)) when user exists
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::User)
                .build()
                .await?;
            let user_model = test.user().insert_user("Pilot").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(user_model.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when user does not exist
        #[tokio::test]
        async fn returns_none_for_missing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::User)
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_for_update(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
