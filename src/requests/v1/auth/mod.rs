use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{self, Validation};

/// Both fields are optional on the wire: a missing field is a validation
/// failure, not a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[schema(example = "mail@mail.com")]
    pub email: Option<String>,
    #[schema(example = "qweqwe")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[schema(example = "user1@mail.com")]
    pub email: Option<String>,
    #[schema(example = "qweqwe")]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Presence and shape rules only; uniqueness is checked against the store.
    pub fn validate(&self) -> Validation {
        validation::credentials(self.email.as_deref(), self.password.as_deref())
    }
}

impl LoginRequest {
    /// Same rules as registration.
    pub fn validate(&self) -> Validation {
        validation::credentials(self.email.as_deref(), self.password.as_deref())
    }
}
