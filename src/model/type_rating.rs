use std::collections::HashSet;

/// Type ratings a pilot holds and the aircraft they authorize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldTypeRatings {
    pub type_rating_ids: Vec<i32>,
    pub aircraft_ids: HashSet<i32>,
}

impl HeldTypeRatings {
    pub fn is_empty(&self) -> bool {
        self.type_rating_ids.is_empty()
    }

    pub fn authorizes(&self, aircraft_id: i32) -> bool {
        self.aircraft_ids.contains(&aircraft_id)
    }
}

/// Result of a type rating assignment change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRatingOutcome {
    Added,
    /// Previous rating replaced; `adjustment` is the signed career minute correction written.
    Switched { adjustment: i32 },
    Removed,
    /// The relation did not exist, nothing was changed.
    AlreadyRemoved,
}

impl TypeRatingOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => "Type rating added successfully",
            Self::Switched { .. } => "Type rating switched successfully",
            Self::Removed => "Type rating removed successfully",
            Self::AlreadyRemoved => "Type rating already removed",
        }
    }
}
