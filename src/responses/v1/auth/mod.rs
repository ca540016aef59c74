use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::v1::users;

/// Public projection of a freshly registered user. The password hash never
/// leaves the store.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Registered {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "mail@mail.com")]
    pub email: String,
}

impl From<users::Model> for Registered {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl Responder for Registered {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Created().json(self)
    }
}

/// A freshly issued session.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Authenticated {
    #[schema()]
    pub token: String,
}

impl Responder for Authenticated {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
