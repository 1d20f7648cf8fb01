use actix_cors::Cors;
use actix_web::http::header;

/// Browser access for the single configured UI origin. Auth travels in the
/// `Authorization` header, so no cookies or credentials mode.
pub fn middleware(origin: &str) -> Cors {
    Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allowed_origin(origin)
        .max_age(3600)
}
