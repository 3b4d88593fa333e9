pub use super::game::Entity as Game;
pub use super::game_result::Entity as GameResult;
pub use super::game_service::Entity as GameServiceLink;
pub use super::membership_request::Entity as MembershipRequest;
pub use super::profile::Entity as Profile;
pub use super::service::Entity as Service;
pub use super::team::Entity as Team;
pub use super::team_history::Entity as TeamHistory;
pub use super::university::Entity as University;
pub use super::user::Entity as User;
