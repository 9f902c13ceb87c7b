//! Data Transfer Objects

use serde::{Deserialize, Serialize};

/// POST /api/register request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub lrn: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub sex: String,
    pub password: String,
    pub class_code: String,
    pub school_year: String,
}

/// POST /api/register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}
