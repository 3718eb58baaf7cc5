use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AppState;
use crate::catalog::Listing;
use crate::registration::{self, ErrorKind, RegistrationError};

#[derive(Debug, Deserialize)]
pub(crate) struct EmailQuery {
    email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message {
    message: String,
}

#[derive(Debug, Serialize)]
struct Detail {
    detail: String,
}

pub(crate) enum ApiError {
    Registration(RegistrationError),
    MissingEmail,
}

impl From<RegistrationError> for ApiError {
    fn from(e: RegistrationError) -> Self {
        ApiError::Registration(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Registration(e) => {
                let status = match e.kind() {
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
                };
                (status, e.to_string())
            }
            ApiError::MissingEmail => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Missing required query parameter: email".to_string(),
            ),
        };
        (status, Json(Detail { detail })).into_response()
    }
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    match query {
        Ok(Query(q)) => Ok(q.email),
        Err(e) => {
            debug!("Rejected query string: {}", e);
            Err(ApiError::MissingEmail)
        }
    }
}

pub(crate) async fn list_handler(State(state): State<AppState>) -> Json<Listing> {
    let listing = state.catalog().list_all();
    debug!("Listing {} activities", listing.len());
    Json(listing)
}

pub(crate) async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let email = email_from(query)?;
    let result = registration::signup(&mut state.catalog(), &activity_name, &email);
    match result {
        Ok(message) => Ok(Json(Message { message })),
        Err(e) => {
            warn!("Signup of {} for '{}' rejected: {}", email, activity_name, e);
            Err(e.into())
        }
    }
}

pub(crate) async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let email = email_from(query)?;
    let result = registration::unregister(&mut state.catalog(), &activity_name, &email);
    match result {
        Ok(message) => Ok(Json(Message { message })),
        Err(e) => {
            warn!(
                "Unregister of {} from '{}' rejected: {}",
                email, activity_name, e
            );
            Err(e.into())
        }
    }
}
