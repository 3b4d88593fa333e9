//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build entity models in memory for unit tests of conversions and
//! response projection, and supply the defaults used by the factories. Unlike
//! factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//!
//! let named = fixture::user::entity_builder()
//!     .display_name("Alice")
//!     .build();
//! ```

pub mod team;
pub mod user;

pub use team::{entity as team_entity, entity_builder as team_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
