use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::{debug, info};

use super::{ContactForm, FormErrors, LoginForm, OtpForm, SignupForm};

/// Validation-only endpoints for the auth and support forms. Nothing is
/// persisted; a valid submission is acknowledged with the normalized payload.
pub fn form_router() -> Router {
    Router::new()
        .route("/api/v1/auth/signup", post(signup_handler))
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/otp", post(otp_handler))
        .route("/api/v1/support/contact", post(contact_handler))
}

pub(crate) async fn signup_handler(axum::Json(form): axum::Json<SignupForm>) -> Response {
    match form.validate() {
        Ok(profile) if form.requires_otp() => {
            info!(
                role = ?profile.role,
                phone = %profile.masked_phone(),
                "otp dispatched for worker signup"
            );
            let payload = json!({
                "status": "otp_required",
                "phone": profile.phone,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Ok(profile) => {
            let payload = json!({
                "status": "created",
                "profile": profile,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(errors) => rejected("signup", errors),
    }
}

pub(crate) async fn login_handler(axum::Json(form): axum::Json<LoginForm>) -> Response {
    match form.validate() {
        Ok(request) => {
            let payload = json!({
                "status": "accepted",
                "email": request.email,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(errors) => rejected("login", errors),
    }
}

pub(crate) async fn otp_handler(axum::Json(form): axum::Json<OtpForm>) -> Response {
    match form.validate() {
        Ok(profile) => {
            let payload = json!({
                "status": "created",
                "profile": profile,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(errors) => rejected("otp", errors),
    }
}

pub(crate) async fn contact_handler(axum::Json(form): axum::Json<ContactForm>) -> Response {
    match form.validate() {
        Ok(request) => {
            info!(category = ?request.category, "support message received");
            let payload = json!({
                "status": "received",
                "message": request,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(errors) => rejected("contact", errors),
    }
}

fn rejected(form: &'static str, errors: FormErrors) -> Response {
    debug!(form, invalid = errors.len(), "form rejected");
    let payload = json!({
        "errors": errors,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
