/// Pilot crossed into a higher rank after career minutes changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankupNotification {
    pub user_id: i32,
    /// Rank before the change, `None` when no rank matched.
    pub previous_rank_id: Option<i32>,
    pub new_rank_id: i32,
    pub previous_minutes: i64,
    pub new_minutes: i64,
}
