//! Declarative test builder.
//!
//! `TestBuilder` queues table creation and base fixtures, executing all of them during the final
//! `build()` call so a test reads as a short declaration of the state it needs.

use crate::{error::TestError, TestContext};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up an in-memory database with the tables and airline
/// settings a test needs. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_logbook_tables: bool,

    // Database fixtures to insert
    airline: Option<(bool, f64)>, // (enforce_type_ratings, type_rating_change_divisor)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_logbook_tables: false,
            airline: None,
        }
    }

    /// Add every logbook table to the test database.
    ///
    /// Creates the tables in foreign key dependency order: User, Aircraft, Airline, Rank,
    /// RankAircraft, TypeRating, TypeRatingAircraft, UserTypeRating, Pirep, PirepEvent and
    /// FlightTimeLedger.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_logbook_tables(mut self) -> Self {
        self.include_logbook_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use logbook_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), logbook_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(FlightTimeLedger)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the airline settings row.
    ///
    /// Without this call the airline table stays empty and services fall back to
    /// default settings (no enforcement, divisor of 1).
    ///
    /// # Arguments
    /// - `enforce_type_ratings` - Whether type ratings restrict aircraft eligibility
    /// - `type_rating_change_divisor` - Divisor applied to career time on a rating switch
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_airline(mut self, enforce_type_ratings: bool, type_rating_change_divisor: f64) -> Self {
        self.airline = Some((enforce_type_ratings, type_rating_change_divisor));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (logbook tables if specified, then custom tables)
    /// 2. Inserts database fixtures (airline settings)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_logbook_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::Airline),
                schema.create_table_from_entity(entity::prelude::Rank),
                schema.create_table_from_entity(entity::prelude::RankAircraft),
                schema.create_table_from_entity(entity::prelude::TypeRating),
                schema.create_table_from_entity(entity::prelude::TypeRatingAircraft),
                schema.create_table_from_entity(entity::prelude::UserTypeRating),
                schema.create_table_from_entity(entity::prelude::Pirep),
                schema.create_table_from_entity(entity::prelude::PirepEvent),
                schema.create_table_from_entity(entity::prelude::FlightTimeLedger),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        if let Some((enforce_type_ratings, divisor)) = self.airline {
            test.airline()
                .insert_airline(enforce_type_ratings, divisor)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
