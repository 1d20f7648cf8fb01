use actix_web::web;
use common::http;

pub mod cors;

/// Every route under `/api`. Only signup and signin are reachable without a
/// bearer token.
pub fn mount_api() -> actix_web::Scope {
    web::scope("/api")
        .app_data(http::json_config())
        .app_data(http::path_config())
        .service(api_auth::mount_auth())
        .service(api_auth::mount_user().wrap(api_auth::auth_middleware()))
        .service(api_rentals::mount_properties().wrap(api_auth::auth_middleware()))
        .service(api_rentals::mount_tenants().wrap(api_auth::auth_middleware()))
        .service(api_rentals::mount_payments().wrap(api_auth::auth_middleware()))
        .service(api_rentals::mount_messages().wrap(api_auth::auth_middleware()))
}
