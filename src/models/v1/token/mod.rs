use sea_orm::prelude::*;
use sea_orm::Condition;

use crate::entities::v1::tokens::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::users;
use crate::helpers::now;

impl Model {
    /// Wire encoding of the bearer credential.
    pub fn encoded(&self) -> String {
        bs58::encode(self.id.as_bytes()).into_string()
    }

    pub fn decode(token: &str) -> Option<Uuid> {
        let bytes = bs58::decode(token).into_vec().ok()?;

        Uuid::from_slice(&bytes).ok()
    }

    /// Resolve an encoded token to its unexpired owner. Undecodable and
    /// expired tokens are invalid, not errors.
    pub async fn verify(db: &DatabaseConnection, token: &str) -> Option<users::Model> {
        let id = Self::decode(token)?;

        Self::user(db, id).await
    }

    pub async fn user(db: &DatabaseConnection, id: Uuid) -> Option<users::Model> {
        let query = users::Entity::find()
            .inner_join(Entity)
            .filter(Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(Column::ExpiredAt.gt(now()))
                    .add(Column::ExpiredAt.is_null()),
            );

        match query.one(db).await {
            Ok(user) => user,
            Err(e) => {
                ::tracing::error!("Failed to find token by id");
                ::tracing::error!("Error: {}", e);

                None
            }
        }
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel::from(self.clone()).insert(db).await
    }
}
