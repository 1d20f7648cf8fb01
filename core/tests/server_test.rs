//! The assembled server: middleware order, CORS and route mounting.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, http::header, test, web};
use common::env_config::{Config, JwtConfig};
use serde_json::{Value, json};

const ORIGIN: &str = "http://localhost:5173";

fn config() -> Arc<Config> {
    Arc::new(Config {
        environment: "test".into(),
        database_url: "sqlite::memory:".into(),
        jwt_config: JwtConfig {
            secret: "server-test-secret".into(),
            expiration_hours: 24,
        },
        server_host: "127.0.0.1".into(),
        server_port: 0,
        num_workers: 1,
        cors_allowed_origin: ORIGIN.into(),
        console_logging_enabled: true,
        log_file: "test.log".into(),
    })
}

macro_rules! app {
    ($pool:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new($config.clone()))
                .wrap(logger::middleware($config.console_logging_enabled))
                .wrap(extractor::middleware($config.jwt_config.clone()))
                .wrap(leasehold::cors::middleware(&$config.cors_allowed_origin))
                .service(leasehold::mount_api()),
        )
        .await
    };
}

#[actix_web::test]
async fn signup_token_opens_every_guarded_scope() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "password": "Passw0rd!",
            "role": "owner"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().unwrap().to_string();

    for uri in [
        "/api/users/me",
        "/api/properties",
        "/api/tenants",
        "/api/payments",
        "/api/messages",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK, "{}", uri);

        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[actix_web::test]
async fn preflight_from_configured_origin_is_allowed() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/properties")
        .insert_header((header::ORIGIN, ORIGIN))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ORIGIN)
    );
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);

    let req = test::TestRequest::get().uri("/api/nothing").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn extractor_failures_answer_with_json_errors() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "password": "Passw0rd!"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri("/api/properties/not-a-uuid")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["error"].is_string());
}
