pub use sea_orm_migration::prelude::*;

mod m20250602_000001_create_users;
mod m20250602_000002_create_tokens;
mod m20250602_000003_user_initial_seeder;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250602_000001_create_users::Migration),
            Box::new(m20250602_000002_create_tokens::Migration),
            Box::new(m20250602_000003_user_initial_seeder::Migration),
        ]
    }
}
