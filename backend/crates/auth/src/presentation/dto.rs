//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// POST /api/auth/login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login response
#[derive(Debug, Serialize)]
pub struct LogInResponse {
    pub message: String,
}

/// POST /api/auth/logout response
#[derive(Debug, Serialize)]
pub struct LogOutResponse {
    pub message: String,
}

/// GET /api/auth/status response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
