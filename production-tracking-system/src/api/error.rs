use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder, ResponseError,
};
use domain_tracking::exception::TrackingException;
use serde::Serialize;

/// Wire envelope around every response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBase<T> {
    pub status: i32,
    pub message: String,
    pub content: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn ok(content: T) -> Self {
        Self {
            status: 200,
            message: "Ok".to_string(),
            content: Some(content),
        }
    }

    pub fn err(status: i32, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            content: None,
        }
    }
}

pub struct ApiResponder<T: Serialize>(pub T);

impl<T: Serialize> Responder for ApiResponder<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(ResponseBase::ok(self.0))
    }
}

pub type ApiResponderResult<T> = Result<ApiResponder<T>, ApiError>;

#[derive(Debug)]
pub struct ApiError(pub TrackingException);

impl From<TrackingException> for ApiError {
    fn from(e: TrackingException) -> Self {
        Self(e)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            TrackingException::InvalidCredentials | TrackingException::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            TrackingException::NotFound { .. } => StatusCode::NOT_FOUND,
            TrackingException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{:?}", self.0);
            return HttpResponse::build(status)
                .json(ResponseBase::<()>::err(500, "Internal error."));
        }
        HttpResponse::build(status)
            .json(ResponseBase::<()>::err(i32::from(status.as_u16()), &self.0.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn status_of(e: TrackingException) -> StatusCode {
        ApiError::from(e).status_code()
    }

    #[test]
    fn exceptions_map_to_http_statuses() {
        assert_eq!(
            status_of(TrackingException::DuplicateEmail {
                email: "a@b.c".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(TrackingException::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(TrackingException::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(TrackingException::NotFound {
                entity: "task",
                id: Uuid::new_v4()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(TrackingException::InternalError {
                source: anyhow::anyhow!("boom")
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(TrackingException::QuantityExceeded {
                id: Uuid::new_v4(),
                quantity: 10,
                attempted: 12
            }),
            StatusCode::BAD_REQUEST
        );
    }
}
