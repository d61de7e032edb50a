use entity::sea_orm_active_enums::{FlightTimeCategory, FlightTimeSourceType};

/// Ledger entry to append. The id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLedgerEntry {
    pub user_id: i32,
    /// Signed, never zero.
    pub minutes: i32,
    pub category: FlightTimeCategory,
    pub source_type: FlightTimeSourceType,
    pub pirep_id: Option<i32>,
    pub note: Option<String>,
}

impl NewLedgerEntry {
    pub fn new(
        user_id: i32,
        minutes: i32,
        category: FlightTimeCategory,
        source_type: FlightTimeSourceType,
    ) -> Self {
        Self {
            user_id,
            minutes,
            category,
            source_type,
            pirep_id: None,
            note: None,
        }
    }

    pub fn with_pirep(mut self, pirep_id: i32) -> Self {
        self.pirep_id = Some(pirep_id);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
