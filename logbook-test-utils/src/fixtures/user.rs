use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a pilot holding only the member role.
    pub async fn insert_user(&self, name: &str) -> Result<UserModel, TestError> {
        self.insert_user_with_roles(name, "member").await
    }

    /// Insert a pilot with a comma separated role list, e.g. `"member,pireps"`.
    pub async fn insert_user_with_roles(
        &self,
        name: &str,
        roles: &str,
    ) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                roles: ActiveValue::Set(roles.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
