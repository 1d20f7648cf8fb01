use std::{future::Future, pin::Pin, rc::Rc, sync::Arc};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
};
use futures::future::{Ready, ok};

use common::{
    env_config::JwtConfig,
    error::Res,
    jwt::{self, JwtClaims},
};

/// Decodes the bearer token, if any, and stores the outcome as
/// `Res<JwtClaims>` in the request extensions. It never rejects; guarded
/// scopes decide with `AuthMiddleware`.
pub struct ExtractionMiddleware {
    jwt_config: Rc<JwtConfig>,
}

impl ExtractionMiddleware {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self {
            jwt_config: Rc::new(jwt_config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ExtractionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = ExtractionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ExtractionMiddlewareService {
            service: Arc::new(service),
            jwt_config: Rc::clone(&self.jwt_config),
        })
    }
}

pub struct ExtractionMiddlewareService<S> {
    service: Arc<S>,
    jwt_config: Rc<JwtConfig>,
}

/// Token part of an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty())
}

impl<S, B> Service<ServiceRequest> for ExtractionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = bearer_token(&req);
        let jwt_config = Rc::clone(&self.jwt_config);
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            if let Some(token) = token {
                // validate token and insert claims to request object for future use
                let claims_res = jwt::validate_jwt(&token, &jwt_config.secret);
                if let Err(e) = &claims_res {
                    log::debug!("Bearer token rejected: {}", e);
                }
                req.extensions_mut().insert::<Res<JwtClaims>>(claims_res);
            }
            srv.call(req).await.map(|res| res.map_into_boxed_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_srv_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def.ghi"));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_srv_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default().to_srv_request();
        assert_eq!(bearer_token(&req), None);
    }
}
