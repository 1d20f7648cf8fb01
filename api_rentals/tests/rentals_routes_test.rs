//! End-to-end flows through the guarded rental endpoints.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use common::env_config::{Config, JwtConfig};
use serde_json::{Value, json};

fn config() -> Arc<Config> {
    Arc::new(Config {
        environment: "test".into(),
        database_url: "sqlite::memory:".into(),
        jwt_config: JwtConfig {
            secret: "rentals-test-secret".into(),
            expiration_hours: 24,
        },
        server_host: "127.0.0.1".into(),
        server_port: 0,
        num_workers: 1,
        cors_allowed_origin: "http://localhost".into(),
        console_logging_enabled: false,
        log_file: "test.log".into(),
    })
}

macro_rules! app {
    ($pool:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new($config.clone()))
                .app_data(common::http::json_config())
                .app_data(common::http::path_config())
                .wrap(extractor::middleware($config.jwt_config.clone()))
                .service(
                    web::scope("/api")
                        .service(api_auth::mount_auth())
                        .service(api_rentals::mount_properties().wrap(api_auth::auth_middleware()))
                        .service(api_rentals::mount_tenants().wrap(api_auth::auth_middleware()))
                        .service(api_rentals::mount_payments().wrap(api_auth::auth_middleware()))
                        .service(api_rentals::mount_messages().wrap(api_auth::auth_middleware())),
                ),
        )
        .await
    };
}

macro_rules! sign_up {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": $email,
                "password": "Passw0rd!",
                "role": "manager"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

fn unit(name: &str, rent: f64) -> Value {
    json!({
        "name": name,
        "address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zipCode": "62701",
        "type": "apartment",
        "bedrooms": 2,
        "bathrooms": 1.0,
        "sqft": 850,
        "rent": rent,
        "amenities": ["parking", "parking", "laundry"]
    })
}

#[actix_web::test]
async fn manager_creates_and_lists_properties() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);
    let (token, _) = sign_up!(app, "jane@x.com");

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .insert_header(bearer(&token))
        .set_json(unit("Unit 1", 1500.0))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    assert!(created["id"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/properties")
        .insert_header(bearer(&token))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let first = &listed[0];
    assert_eq!(first["id"], created["id"]);
    assert_eq!(first["name"], "Unit 1");
    assert_eq!(first["rent"], 1500.0);
    assert_eq!(first["deposit"], 1500.0);
    assert_eq!(first["status"], "available");
    assert_eq!(first["type"], "apartment");
    assert_eq!(first["amenities"], json!(["parking", "laundry"]));
}

#[actix_web::test]
async fn rental_routes_require_a_token() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);

    for uri in ["/api/properties", "/api/tenants", "/api/payments", "/api/messages"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .insert_header(bearer("garbage"))
        .set_json(unit("Unit 1", 1500.0))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    assert!(db::property::get_properties(&*pool).await.unwrap().is_empty());
}

#[actix_web::test]
async fn deleting_property_keeps_tenant_and_drops_payments() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);
    let (token, _) = sign_up!(app, "jane@x.com");

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .insert_header(bearer(&token))
        .set_json(unit("Unit 1", 1500.0))
        .to_request();
    let property: Value = test::call_and_read_body_json(&app, req).await;
    let property_id = property["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/tenants")
        .insert_header(bearer(&token))
        .set_json(json!({
            "firstName": "Sam",
            "lastName": "Renter",
            "email": "sam@x.com",
            "phone": "555-0100",
            "propertyId": property_id,
            "leaseStart": "2025-01-01",
            "leaseEnd": "2025-12-31"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let tenant: Value = test::read_body_json(res).await;
    let tenant_id = tenant["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/payments")
        .insert_header(bearer(&token))
        .set_json(json!({
            "tenantId": tenant_id,
            "propertyId": property_id,
            "amount": 1500.0,
            "dueDate": "2025-02-01"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/payments")
        .insert_header(bearer(&token))
        .to_request();
    let payments: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(payments[0]["tenantFirstName"], "Sam");
    assert_eq!(payments[0]["propertyName"], "Unit 1");
    assert_eq!(payments[0]["status"], "pending");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/properties/{}", property_id))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/tenants")
        .insert_header(bearer(&token))
        .to_request();
    let tenants: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tenants[0]["id"], tenant_id.as_str());
    assert!(tenants[0]["propertyId"].is_null());

    let req = test::TestRequest::get()
        .uri("/api/payments")
        .insert_header(bearer(&token))
        .to_request();
    let payments: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(payments, json!([]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/properties/{}", property_id))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn tenant_for_unknown_property_is_rejected() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);
    let (token, _) = sign_up!(app, "jane@x.com");

    let req = test::TestRequest::post()
        .uri("/api/tenants")
        .insert_header(bearer(&token))
        .set_json(json!({
            "firstName": "Sam",
            "lastName": "Renter",
            "email": "sam@x.com",
            "phone": "555-0100",
            "propertyId": uuid::Uuid::new_v4()
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    assert!(db::tenant::get_tenants(&*pool).await.unwrap().is_empty());
}

#[actix_web::test]
async fn only_the_recipient_marks_a_message_read() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);
    let (alice, _) = sign_up!(app, "alice@x.com");
    let (bob, bob_id) = sign_up!(app, "bob@x.com");

    let req = test::TestRequest::post()
        .uri("/api/messages")
        .insert_header(bearer(&alice))
        .set_json(json!({ "recipientId": bob_id, "content": "Rent is due" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let message: Value = test::read_body_json(res).await;
    assert_eq!(message["type"], "sent");
    assert_eq!(message["read"], false);
    let read_uri = format!("/api/messages/{}/read", message["id"].as_str().unwrap());

    let req = test::TestRequest::post()
        .uri(&read_uri)
        .insert_header(bearer(&alice))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri(&read_uri)
        .insert_header(bearer(&bob))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/messages")
        .insert_header(bearer(&bob))
        .to_request();
    let inbox: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(inbox[0]["read"], true);
}

#[actix_web::test]
async fn duplicate_tenant_email_is_a_bad_request() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);
    let (token, _) = sign_up!(app, "jane@x.com");

    let tenant = json!({
        "firstName": "Sam",
        "lastName": "Renter",
        "email": "jane@x.com",
        "phone": "555-0100"
    });

    // a user with the same email does not block the tenant
    let req = test::TestRequest::post()
        .uri("/api/tenants")
        .insert_header(bearer(&token))
        .set_json(tenant.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/tenants")
        .insert_header(bearer(&token))
        .set_json(tenant)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db::tenant::get_tenants(&*pool).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn property_tenant_id_is_stored_without_a_lookup() {
    let (pool, config) = (db::setup_in_memory().await.unwrap(), config());
    let app = app!(pool, config);
    let (token, _) = sign_up!(app, "jane@x.com");

    let dangling = uuid::Uuid::new_v4();
    let mut body = unit("Unit 1", 1500.0);
    body["tenantId"] = json!(dangling);
    let req = test::TestRequest::post()
        .uri("/api/properties")
        .insert_header(bearer(&token))
        .set_json(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let listed = db::property::get_properties(&*pool).await.unwrap();
    assert_eq!(listed[0].tenant_id, Some(dangling));
}
