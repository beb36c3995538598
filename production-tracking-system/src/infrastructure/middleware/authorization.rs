use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use domain_tracking::{
    exception::TrackingException,
    model::{entity::technician::Role, vo::auth::Claims},
};
use futures::future::LocalBoxFuture;
use jsonwebtoken::{decode as jwt_decode, DecodingKey, Validation};
use uuid::Uuid;

use crate::{api::error::ApiError, infrastructure::config::JwtConfig};

/// Authenticated user attached to the request by [`JwtAuth`].
#[derive(Clone, Debug)]
pub struct UserInfo {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl UserInfo {
    fn new(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl FromRequest for UserInfo {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<UserInfo>()
                .cloned()
                .ok_or(ApiError::from(TrackingException::Unauthorized)),
        )
    }
}

/// Decodes the bearer token and inserts [`UserInfo`] into the request
/// extensions. Never rejects by itself: routes that need a user extract
/// [`UserInfo`] and answer 401 when it is absent.
pub struct JwtAuth {
    config: JwtConfig,
}

impl JwtAuth {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            config: self.config.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    config: JwtConfig,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.clone();
        Box::pin(async move {
            let user_info = match req.headers().get("Authorization") {
                Some(head) => match head.to_str() {
                    Ok(value) => match parse_bearer_claims(value, &config) {
                        Ok(claims) => Some(UserInfo::new(claims)),
                        Err(e) => {
                            tracing::debug!("{}", e);
                            None
                        }
                    },
                    Err(e) => {
                        tracing::debug!("{}", e);
                        None
                    }
                },
                None => None,
            };
            if let Some(user_info) = user_info {
                req.extensions_mut().insert(user_info);
            }
            service.call(req).await
        })
    }
}

fn parse_bearer_claims(authorization_str: &str, config: &JwtConfig) -> anyhow::Result<Claims> {
    let parts = authorization_str.split_whitespace().collect::<Vec<&str>>();
    if parts.len() < 2 || !parts[0].eq("Bearer") {
        anyhow::bail!("Not Bearer Token.")
    }
    let token = parts[1];
    let mut validation = Validation::default();
    validation.leeway = *config.leeway();
    let data = jwt_decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret().as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    fn token(secret: &str, exp_offset: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "dana@example.com".to_string(),
            role: Role::Technician,
            iat: now.timestamp(),
            exp: (now + exp_offset).timestamp(),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn bearer_token_decodes_to_claims() {
        let config = JwtConfig::default();
        let header = format!("Bearer {}", token(config.secret(), Duration::hours(1)));
        let claims = parse_bearer_claims(&header, &config).unwrap();
        assert_eq!(claims.email, "dana@example.com");
    }

    #[test]
    fn non_bearer_scheme_is_refused() {
        let config = JwtConfig::default();
        assert!(parse_bearer_claims("Basic abc", &config).is_err());
    }

    #[test]
    fn wrong_secret_is_refused() {
        let config = JwtConfig::default();
        let header = format!("Bearer {}", token("other-secret", Duration::hours(1)));
        assert!(parse_bearer_claims(&header, &config).is_err());
    }

    #[test]
    fn expired_token_is_refused() {
        let config = JwtConfig::default();
        let header = format!("Bearer {}", token(config.secret(), Duration::hours(-2)));
        assert!(parse_bearer_claims(&header, &config).is_err());
    }
}
