use actix_web::web::{self};
use middleware::auth::AuthMiddleware;

pub mod dtos {
    pub mod auth;
}
pub mod middleware {
    pub mod auth;
}
pub mod routes {
    pub mod auth;
    pub mod user;
}
pub mod services {
    pub mod auth;
    pub mod user;
}

// Rejects requests without valid bearer claims
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::auth::post_signup)
        .service(routes::auth::post_signin)
}
pub fn mount_user() -> actix_web::Scope {
    web::scope("/users").service(routes::user::get_me)
}
