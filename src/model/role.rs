//! Role tokens and acting identity.

use std::{collections::HashSet, str::FromStr};

use crate::error::Error;

/// Role a pilot account may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Owner,
    Admin,
    /// Staff allowed to review, approve and delete PIREPs.
    Pireps,
    /// Staff allowed to manage pilot accounts.
    Users,
    Member,
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "pireps" => Ok(Self::Pireps),
            "users" => Ok(Self::Users),
            "member" => Ok(Self::Member),
            other => Err(Error::ParseError(format!("unknown role {}", other))),
        }
    }
}

/// Set of roles held by one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    /// Parse a comma separated role field; unknown tokens are skipped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .filter(|token| !token.trim().is_empty())
                .filter_map(|token| token.parse::<Role>().ok())
                .collect(),
        )
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Admin and Owner bypass catalogue restrictions.
    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin) || self.contains(Role::Owner)
    }

    /// True when any of `required` is held. Admin and Owner satisfy every requirement.
    pub fn has_required_role(&self, required: &[Role]) -> bool {
        self.is_admin() || required.iter().any(|role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Identity performing an operation, supplied by the authentication layer.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: i32,
    pub roles: RoleSet,
}

impl Actor {
    pub fn new(user_id: i32, roles: RoleSet) -> Self {
        Self { user_id, roles }
    }
}
