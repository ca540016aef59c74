use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString},
};
use rand::rngs::OsRng;
use sea_orm_migration::prelude::*;

use crate::m20250602_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_EMAIL: &str = "user1@mail.com";
const SEED_PASSWORD: &[u8] = b"qweqwe";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Argon2id at the OWASP minimum recommended parameters
        let params = Params::new(
            19456, // 19 MB memory cost
            2,     // 2 iterations
            1,     // 1 thread
            Some(32),
        )
        .expect("Invalid Argon2 parameters");

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(SEED_PASSWORD, &salt)
            .expect("Failed to hash password")
            .to_string();

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(User::Table)
                    .columns(vec![
                        User::Email,
                        User::Password,
                        User::CreatedAt,
                        User::UpdatedAt,
                    ])
                    .values_panic(vec![
                        SEED_EMAIL.into(),
                        password_hash.into(),
                        chrono::Utc::now().naive_utc().into(),
                        chrono::Utc::now().naive_utc().into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col(User::Email).eq(SEED_EMAIL))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
