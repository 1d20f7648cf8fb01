use actix_web::{HttpMessage, HttpResponse, dev::ServiceRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    env_config::JwtConfig,
    error::{AppError, Res},
    misc::Role,
};

/// Payload of a session token. Nothing beyond the identity triple and the
/// issue/expiry timestamps is signed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JwtClaims {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimsSpec {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl JwtClaims {
    pub fn spec(&self) -> ClaimsSpec {
        ClaimsSpec {
            user_id: self.user_id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Generates JWT token from the identity claims and JWT configuration options
pub fn generate_jwt(spec: ClaimsSpec, config: &JwtConfig) -> Res<String> {
    generate_jwt_at(spec, config, Utc::now().timestamp())
}

/// Same as [`generate_jwt`] with an explicit issue time (unix seconds).
pub fn generate_jwt_at(spec: ClaimsSpec, config: &JwtConfig, issued_at: i64) -> Res<String> {
    let claims = JwtClaims {
        user_id: spec.user_id,
        email: spec.email,
        role: spec.role,
        iat: issued_at,
        exp: issued_at + Duration::hours(config.expiration_hours).num_seconds(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::from)
}

/// Extracts claims object from JWT token.
/// Requires JWT secret.
pub fn validate_jwt(token: &str, secret: &str) -> Res<JwtClaims> {
    validate_jwt_at(token, secret, Utc::now().timestamp())
}

/// Verifies the signature and checks expiry against `now` (unix seconds).
/// A token is expired once `now` is past `exp`; no leeway is granted.
pub fn validate_jwt_at(token: &str, secret: &str, now: i64) -> Res<JwtClaims> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "iat"]);

    let token_data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::ExpiredToken,
        _ => AppError::InvalidToken(e.to_string()),
    })?;

    if now > token_data.claims.exp {
        return Err(AppError::ExpiredToken);
    }
    Ok(token_data.claims)
}

pub fn get_jwt_claims_or_error(req: &ServiceRequest) -> Result<JwtClaims, HttpResponse> {
    if let Some(jwt_claims_res) = req.extensions().get::<Res<JwtClaims>>() {
        match jwt_claims_res {
            Ok(claims) => Ok(claims.clone()),
            Err(app_error) => Err(app_error.to_http_response()),
        }
    } else {
        Err(AppError::MissingToken.to_http_response())
    }
}
