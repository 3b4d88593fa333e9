//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (university, team) = factory::helpers::create_team_with_university(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .user_name("root")
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//! ```

pub mod game;
pub mod game_result;
pub mod helpers;
pub mod membership_request;
pub mod profile;
pub mod service;
pub mod team;
pub mod team_history;
pub mod university;
pub mod user;

pub use game::create_game;
pub use game_result::create_result;
pub use membership_request::create_membership_request;
pub use profile::create_profile;
pub use service::create_service;
pub use team::create_team;
pub use team_history::create_history_entry;
pub use university::create_university;
pub use user::create_user;
