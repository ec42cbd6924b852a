//! Authentication DTOs

use serde::{Deserialize, Serialize};

/// Credentials exchanged for a JWT pair
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// JWT pair returned by the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}
