pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_user_table;
mod m20240901_000002_create_university_table;
mod m20240901_000003_create_team_table;
mod m20240901_000004_create_service_table;
mod m20240901_000005_create_game_table;
mod m20240901_000006_create_result_table;
mod m20240902_000007_create_profile_table;
mod m20240902_000008_create_membership_request_table;
mod m20240902_000009_create_team_history_table;
mod m20240903_000010_create_game_service_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_user_table::Migration),
            Box::new(m20240901_000002_create_university_table::Migration),
            Box::new(m20240901_000003_create_team_table::Migration),
            Box::new(m20240901_000004_create_service_table::Migration),
            Box::new(m20240901_000005_create_game_table::Migration),
            Box::new(m20240901_000006_create_result_table::Migration),
            Box::new(m20240902_000007_create_profile_table::Migration),
            Box::new(m20240902_000008_create_membership_request_table::Migration),
            Box::new(m20240902_000009_create_team_history_table::Migration),
            Box::new(m20240903_000010_create_game_service_table::Migration),
        ]
    }
}
