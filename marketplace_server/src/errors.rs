use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use marketplace_engine::{CredentialError, Scope};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("This endpoint requires OAuth2 scope: {0}. Provide a Bearer token with this scope.")]
    MissingScope(Scope),
    #[error("This endpoint requires OAuth2. Provide a Bearer token.")]
    OAuthRequired,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
}

impl ServerError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }

    pub fn invalid_path_id(name: &str) -> Self {
        Self::BadRequest(format!("Invalid {name}"))
    }

    pub fn invalid_body() -> Self {
        Self::BadRequest("Invalid request body".into())
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::MissingScope(_) => StatusCode::FORBIDDEN,
            Self::OAuthRequired => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<CredentialError> for ServerError {
    fn from(e: CredentialError) -> Self {
        match e {
            CredentialError::Banned => Self::Forbidden(e.to_string()),
            CredentialError::UnknownKeystring | CredentialError::SecretMismatch | CredentialError::Expired => {
                Self::Unauthorized(e.to_string())
            },
        }
    }
}
