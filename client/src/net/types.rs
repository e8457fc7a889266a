//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the back-end JSON payloads. Fields the UI never reads
//! are left out and ignored by serde; fields the server may omit carry
//! `#[serde(default)]` so a sparse response still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the session endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Admin role. The only place the privilege bit lives on the client.
    #[serde(rename = "is_admin", default)]
    pub is_privileged: bool,
}

/// `GET /api/current-user` body. `user` is `null` for anonymous visitors.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionEnvelope {
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

/// `POST /api/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: UserIdentity,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Error payload shape shared by every endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One classifier guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub confidence: f64,
}

/// `POST /api/detect` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetectionResult {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// A persisted detection, as listed in history and admin views.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetectionLog {
    pub id: i64,
    #[serde(default)]
    pub flag_detected: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// ISO-8601 timestamp as emitted by the server.
    pub timestamp: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// One page of detection logs plus totals.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub logs: Vec<DetectionLog>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub current_page: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_detections: u64,
    #[serde(default)]
    pub recent_detections: Vec<DetectionLog>,
}

/// A user row in the admin user list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub identity: UserIdentity,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// `POST /api/admin/create-user` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedUser {
    pub user: UserRecord,
}

/// Static metadata about the deployed classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub model_name: String,
    pub version: String,
    pub architecture: String,
    pub trained_on: String,
    pub precision: String,
    pub recall: String,
    #[serde(rename = "mAP50")]
    pub map50: String,
    pub training_date: String,
    pub input_size: String,
    pub classes: Vec<String>,
    pub framework: String,
    pub description: String,
}

/// Training run metrics for the deployed classifier.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelMetrics {
    pub epochs: u32,
    pub batch_size: u32,
    pub optimizer: String,
    pub initial_learning_rate: f64,
    pub final_learning_rate: f64,
    pub precision_by_class: BTreeMap<String, f64>,
    pub recall_by_class: BTreeMap<String, f64>,
    pub f1_by_class: BTreeMap<String, f64>,
    pub augmentations_used: Vec<String>,
    pub training_hardware: String,
    pub training_time_hours: f64,
}
