use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. NORMAL users own only their personal recipes; ADMIN is
/// unrestricted. Signup always produces NORMAL — admin accounts are created
/// out-of-band at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Normal => "NORMAL",
            Role::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NORMAL" => Some(Role::Normal),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub nickname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 hash - never serialize
    pub role: Role,
    pub created_at: i64,
}

/// The identity a validated token proves: who, and with what role.
/// This is the only thing handlers ever learn about the caller.
#[derive(Debug, Clone, Copy)]
pub struct TokenPayload {
    pub id: Uuid,
    pub role: Role,
}

/// JWT claims as they appear on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: i64,
}

/// Signup body. Fields are optional so a missing field produces our own
/// "missing parameters" message instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}
