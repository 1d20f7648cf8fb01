use actix_web::body::BoxBody;
use actix_web::dev::Payload;
use actix_web::web::{self, Bytes};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use actix_web::HttpMessage;
use colored::Colorize;
use common::jwt::get_jwt_claims_or_error;
use futures::StreamExt;
use futures::future::{LocalBoxFuture, Ready, ready};
use log::{debug, info};
use serde_json::Value;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

/// Request keys whose values never reach the log.
const REDACTED_KEYS: &[&str] = &["password", "token"];

pub struct LoggerMiddleware {
    console_logging_enabled: bool,
}

impl LoggerMiddleware {
    pub fn new(console_logging_enabled: bool) -> Self {
        Self {
            console_logging_enabled,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = LoggerMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddlewareService {
            service: Arc::new(service),
            console_logging_enabled: self.console_logging_enabled,
        }))
    }
}

pub struct LoggerMiddlewareService<S> {
    service: Arc<S>,
    console_logging_enabled: bool,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let srv = Arc::clone(&self.service);

        if !self.console_logging_enabled {
            return Box::pin(async move { srv.call(req).await.map(|res| res.map_into_boxed_body()) });
        }

        let method = req.method().to_string();
        let path = req.path().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let user_id = get_jwt_claims_or_error(&req).ok().map(|c| c.user_id);

            // Copy request body from payload and reconstruct it
            let mut payload = req.take_payload();
            let body_bytes = extract_body(&mut payload).await?;
            let request_body = if !body_bytes.is_empty() {
                serde_json::from_slice::<Value>(&body_bytes).unwrap_or(Value::Null)
            } else {
                Value::Null
            };
            let new_stream: Pin<
                Box<dyn futures::Stream<Item = Result<Bytes, actix_web::error::PayloadError>>>,
            > = futures::stream::once(async move {
                Ok::<Bytes, actix_web::error::PayloadError>(body_bytes)
            })
            .boxed();
            req.set_payload(Payload::from(new_stream));

            let res = srv.call(req).await?;
            let status_code = res.status().as_u16();

            let colored_status = match status_code {
                200..=299 => status_code.to_string().green(),
                300..=399 => status_code.to_string().yellow(),
                400..=499 => status_code.to_string().bright_red(),
                _ => status_code.to_string().red(),
            };

            let colored_method = match method.as_str() {
                "GET" => method.blue(),
                "POST" => method.yellow(),
                "PUT" => method.purple(),
                "DELETE" => method.red(),
                _ => method.normal(),
            };

            info!(
                "[{}] {} {} {} user_id={}",
                colored_status,
                colored_method,
                path.bright_white(),
                format!("({}ms)", started.elapsed().as_millis()).bright_black(),
                user_id
                    .map_or("None".to_string(), |id| id.to_string())
                    .bright_blue(),
            );

            if let Some(body) = request_body.as_object() {
                if !body.is_empty() {
                    debug!(
                        "  Request: {}",
                        redact(request_body.clone()).to_string().bright_green()
                    );
                }
            }

            Ok(res.map_into_boxed_body())
        })
    }
}

/// Replaces secret values anywhere in a JSON document with `"***"`.
fn redact(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| {
                    if REDACTED_KEYS.contains(&key.as_str()) {
                        (key, Value::String("***".to_string()))
                    } else {
                        (key, redact(value))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(redact).collect()),
        other => other,
    }
}

async fn extract_body(payload: &mut Payload) -> Result<Bytes, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};
    use serde_json::json;

    use super::*;

    #[std::prelude::v1::test]
    fn passwords_are_redacted() {
        let redacted = redact(json!({
            "email": "jane@x.com",
            "password": "Passw0rd!",
            "nested": [{ "token": "abc" }]
        }));
        assert_eq!(
            redacted,
            json!({
                "email": "jane@x.com",
                "password": "***",
                "nested": [{ "token": "***" }]
            })
        );
    }

    #[actix_web::test]
    async fn request_body_still_reaches_the_handler() {
        let app = test::init_service(App::new().wrap(LoggerMiddleware::new(true)).route(
            "/echo",
            web::post().to(|body: web::Json<Value>| async move {
                HttpResponse::Ok().json(body.into_inner())
            }),
        ))
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .set_json(json!({ "password": "Passw0rd!" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["password"], "Passw0rd!");
    }
}
