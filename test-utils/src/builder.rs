use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{University, Team};
///
/// let test = TestBuilder::new()
///     .with_table(University)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for team operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - University
    /// - Team
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_team_tables(self) -> Self {
        self.with_table(University).with_table(Team)
    }

    /// Adds all tables required for membership operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - University
    /// - Team
    /// - Profile
    /// - MembershipRequest
    /// - TeamHistory
    ///
    /// Use this when testing join/approve/leave, profile assembly or user deletion,
    /// since deleting a user touches the membership tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_membership_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_membership_tables(self) -> Self {
        self.with_table(User)
            .with_team_tables()
            .with_table(Profile)
            .with_table(MembershipRequest)
            .with_table(TeamHistory)
    }

    /// Adds the tables required for game operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Service
    /// - Game
    /// - GameServiceLink
    pub fn with_game_tables(self) -> Self {
        self.with_table(Service)
            .with_table(Game)
            .with_table(GameServiceLink)
    }

    /// Adds all tables required for result and scoreboard operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - University
    /// - Team
    /// - Service, Game and GameServiceLink
    /// - GameResult
    pub fn with_scoreboard_tables(self) -> Self {
        self.with_team_tables()
            .with_game_tables()
            .with_table(GameResult)
    }

    /// Adds every table a team references, for team deletion.
    ///
    /// Combines the membership, game and result tables, since deleting a team
    /// checks its members and re-ranks the games it scored in.
    pub fn with_all_tables(self) -> Self {
        self.with_membership_tables()
            .with_game_tables()
            .with_table(GameResult)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
