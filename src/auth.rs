use std::ops::Deref;

use actix_web::{body, dev, http::{self, header::ContentType, StatusCode}, web, FromRequest, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::entity::sea_orm_active_enums::RoleType;

/// Verifies the access tokens handed out by the Dayflow auth service.
///
/// Both sides share `JWT_SECRET`, tokens are never issued here.
pub struct Authority {
    jwt_key: DecodingKey,
}

impl Authority {
    pub fn new(jwt_key: &[u8]) -> Self {
        Self {
            jwt_key: DecodingKey::from_secret(jwt_key)
        }
    }

    pub fn authorize(&self, token: impl AsRef<str>) -> Result<Identity, AuthError> {
        let payload = decode::<Claims>(token.as_ref(), &self.jwt_key, &Validation::default())?;

        Ok(Identity {
            id: payload.claims.sub,
            login_id: payload.claims.login_id,
            role: payload.claims.role,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    exp: i64,
    sub: Uuid,
    login_id: String,
    role: RoleType,
}

/// Who is calling, as stated by a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub login_id: String,
    pub role: RoleType,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == RoleType::Admin
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authority error")]
    AuthorityError(#[from] jsonwebtoken::errors::Error),
}

impl actix_web::error::ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match self {
            AuthError::AuthorityError(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl FromRequest for Identity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // `Authorization: <scheme> <token>`, the scheme itself is not checked
            let Some(Ok(Some((_, token)))) = req.headers()
                .get("Authorization")
                .map(|v|
                    v.to_str()
                        .map(|str| str.split_once(" "))
                )
            else {
                return Err(actix_web::error::ErrorUnauthorized("unauthorized"))
            };

            let authority = req.app_data::<web::Data<Authority>>().expect("Authority must be attached");
            let identity = authority.authorize(token)?;

            Ok(identity)
        })
    }
}

pub struct Admin(pub Identity);

impl Deref for Admin {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Admin {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let identity = Identity::from_request(&req, &mut dev::Payload::None).await?;

            if !identity.is_admin() {
                return Err(actix_web::error::ErrorForbidden("forbidden"))
            }

            Ok(Self(identity))
        })
    }
}
