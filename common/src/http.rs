use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{AppError, Res};

/// Body extractor config that answers malformed or mistyped JSON with the
/// usual `{"error": ...}` 400 instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Same for path segments that fail to parse, such as a non-UUID id.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Body returned by every create/delete endpoint: the affected row id and a
/// human readable confirmation.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdMessage {
    pub id: Uuid,
    pub message: String,
}

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Created().json(body))
    }
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(body))
    }
    pub fn created_id(id: Uuid, message: &str) -> Res<impl Responder> {
        Self::created(IdMessage {
            id,
            message: message.to_string(),
        })
    }
    pub fn ok_id(id: Uuid, message: &str) -> Res<impl Responder> {
        Self::ok(IdMessage {
            id,
            message: message.to_string(),
        })
    }
}
