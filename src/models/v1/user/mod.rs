use chrono::NaiveDateTime;
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, Set};

use crate::entities::v1::tokens;
use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::helpers::now;

impl Model {
    pub async fn find_by_email<T: ToString>(db: &DatabaseConnection, email: T) -> Option<Self> {
        let query = Entity::find().filter(Column::Email.eq(email.to_string()));

        match query.one(db).await {
            Ok(user) => user,
            Err(e) => {
                ::tracing::error!("Failed to find user by email");
                ::tracing::error!("Error: {}", e);

                None
            }
        }
    }

    pub async fn email_exists<T: ToString>(db: &DatabaseConnection, email: T) -> bool {
        let query = Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .count(db);

        query.await.unwrap_or(0) > 0
    }

    /// Insert a new user. The caller passes the password hash, never the
    /// plaintext; the store-level unique index on email is the authority on
    /// duplicates.
    pub async fn store<Email, Hash>(
        db: &DatabaseConnection,
        email: Email,
        password: Hash,
    ) -> Result<Self, DbErr>
    where
        Email: ToString,
        Hash: ToString,
    {
        let model = ActiveModel {
            email: Set(email.to_string()),
            password: Set(password.to_string()),
            created_at: Set(now()),
            updated_at: Set(now()),
            ..Default::default()
        };

        model.insert(db).await
    }

    pub async fn generate_token(
        &self,
        db: &DatabaseConnection,
        expired_at: Option<NaiveDateTime>,
    ) -> Result<tokens::Model, DbErr> {
        let token = tokens::Model {
            id: Uuid::new_v4(),
            user_id: self.id,
            expired_at,
        };

        token.store(db).await
    }
}
