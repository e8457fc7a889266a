//! REST API helpers for communicating with the back end.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! `credentials: include` so the session cookie travels with them.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` instead of panicking so session
//! and page fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    CreatedUser, DashboardData, LogPage, ModelInfo, ModelMetrics, NewUser, UserIdentity, UserList,
};
use crate::config::ClientConfig;

#[cfg(feature = "hydrate")]
use super::error::{rejection, request_failed_message};
#[cfg(feature = "hydrate")]
use super::types::{DetectionResult, LoginRequest, LoginResponse, RegisterRequest, SessionEnvelope};
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

pub const SESSION_PATH: &str = "/api/current-user";
pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const DETECT_PATH: &str = "/api/detect";
pub const USER_LOGS_PATH: &str = "/api/user/detection-logs";
pub const ADMIN_DASHBOARD_PATH: &str = "/api/admin/dashboard";
pub const ADMIN_LOGS_PATH: &str = "/api/admin/detection-logs";
pub const ADMIN_USERS_PATH: &str = "/api/admin/users";
pub const ADMIN_CREATE_USER_PATH: &str = "/api/admin/create-user";
pub const MODEL_INFO_PATH: &str = "/api/admin/model-info";
pub const MODEL_METRICS_PATH: &str = "/api/admin/model-metrics";
pub const MANUAL_CALCULATION_PATH: &str = "/api/admin/manual-calculation";

/// Multipart field name the detection endpoints read the upload from.
pub const IMAGE_FIELD: &str = "image";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGOUT_FAILED: &str = "Logout failed";
pub const DETECTION_FAILED: &str = "Detection failed";

/// Path for a paginated list endpoint. Pages are 1-based.
pub(crate) fn paged_path(path: &str, page: u32) -> String {
    format!("{path}?page={}", page.max(1))
}

/// The four session endpoints the session store drives.
///
/// This is the seam between [`crate::state::session::SessionStore`] and the
/// network; tests substitute a scripted implementation.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Identity bound to the ambient session cookie, `None` when anonymous.
    async fn current_user(&self) -> Result<Option<UserIdentity>, ApiError>;

    async fn login(&self, username: &str, password: &str) -> Result<UserIdentity, ApiError>;

    /// Create an account. Does not establish a session.
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

/// `gloo-net` backed client for every endpoint the UI calls.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Classify an uploaded flag image via `POST /api/detect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be built, the request fails, or the
    /// server rejects the image.
    #[cfg(feature = "hydrate")]
    pub async fn detect_flag(&self, image: &web_sys::File) -> Result<DetectionResult, ApiError> {
        let resp = self.post_form(DETECT_PATH, image).await?;
        read_body(resp, Some(DETECTION_FAILED)).await
    }

    /// Run the step-by-step calculation trace for an image.
    ///
    /// The trace is deeply nested and only ever pretty-printed, so it stays
    /// untyped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the image.
    #[cfg(feature = "hydrate")]
    pub async fn manual_calculation(&self, image: &web_sys::File) -> Result<serde_json::Value, ApiError> {
        let resp = self.post_form(MANUAL_CALCULATION_PATH, image).await?;
        read_body(resp, None).await
    }

    /// The signed-in user's own detection history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is missing.
    pub async fn fetch_user_history(&self, page: u32) -> Result<LogPage, ApiError> {
        self.get_json(&paged_path(USER_LOGS_PATH, page)).await
    }

    /// Totals and recent detections for the admin dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get_json(ADMIN_DASHBOARD_PATH).await
    }

    /// All users' detection logs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn fetch_detection_logs(&self, page: u32) -> Result<LogPage, ApiError> {
        self.get_json(&paged_path(ADMIN_LOGS_PATH, page)).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the caller is not an admin.
    pub async fn fetch_users(&self) -> Result<UserList, ApiError> {
        self.get_json(ADMIN_USERS_PATH).await
    }

    /// Create a user from the admin panel.
    ///
    /// # Errors
    ///
    /// Returns the server's validation message on rejection.
    pub async fn create_user(&self, user: &NewUser) -> Result<CreatedUser, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.post_json(ADMIN_CREATE_USER_PATH, user).await?;
            read_body(resp, None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_model_info(&self) -> Result<ModelInfo, ApiError> {
        self.get_json(MODEL_INFO_PATH).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_model_metrics(&self) -> Result<ModelMetrics, ApiError> {
        self.get_json(MODEL_METRICS_PATH).await
    }

    #[cfg(feature = "hydrate")]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = credentialed(Request::get(&self.config.url(path)))
            .send()
            .await
            .map_err(transport)?;
        read_body(resp, None).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        credentialed(Request::post(&self.config.url(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)
    }

    #[cfg(feature = "hydrate")]
    async fn post_empty(&self, path: &str) -> Result<Response, ApiError> {
        credentialed(Request::post(&self.config.url(path)))
            .send()
            .await
            .map_err(transport)
    }

    #[cfg(feature = "hydrate")]
    async fn post_form(&self, path: &str, image: &web_sys::File) -> Result<Response, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob(IMAGE_FIELD, image).map_err(js_error)?;
        credentialed(Request::post(&self.config.url(path)))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)
    }
}

impl SessionApi for HttpApi {
    async fn current_user(&self) -> Result<Option<UserIdentity>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope: SessionEnvelope = self.get_json(SESSION_PATH).await?;
            Ok(envelope.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<UserIdentity, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.post_json(LOGIN_PATH, &LoginRequest { username, password }).await?;
            let body: LoginResponse = read_body(resp, Some(LOGIN_FAILED)).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .post_json(REGISTER_PATH, &RegisterRequest { username, email, password })
                .await?;
            check_status(&resp, Some(REGISTRATION_FAILED)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.post_empty(LOGOUT_PATH).await?;
            check_status(&resp, Some(LOGOUT_FAILED)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn credentialed(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

/// Map a non-2xx response to [`ApiError::Rejected`].
#[cfg(feature = "hydrate")]
async fn check_status(resp: &Response, fallback: Option<&str>) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let fallback = fallback.map_or_else(|| request_failed_message(status), str::to_owned);
    Err(rejection(status, &body, &fallback))
}

#[cfg(feature = "hydrate")]
async fn read_body<T: DeserializeOwned>(resp: Response, fallback: Option<&str>) -> Result<T, ApiError> {
    check_status(&resp, fallback).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
