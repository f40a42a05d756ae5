//! Response DTOs for the cache server API
//!
//! Every data operation answers with a body carrying a [`Status`]; the
//! transport call itself always succeeds.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::encoding::base64_option;

/// Outcome vocabulary shared by all data operations.
///
/// Serialized as the string from [`Status::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Invalid,
    Found,
    NotFound,
    Deleted,
    Unauthorized,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Success,
        Status::Invalid,
        Status::Found,
        Status::NotFound,
        Status::Deleted,
        Status::Unauthorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Invalid => "invalid",
            Status::Found => "found",
            Status::NotFound => "not found",
            Status::Deleted => "deleted",
            Status::Unauthorized => "client key not found",
        }
    }

    /// Parses a wire string back into a status.
    pub fn parse(raw: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Status::parse(&raw).ok_or_else(|| de::Error::custom(format!("unknown status: {}", raw)))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body for the CONNECT operation (POST /connect)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    pub success: bool,
    pub session_key: String,
    /// True when the address already held a session and its key was reused
    pub already_connected: bool,
}

impl ConnectResponse {
    /// A connect that could not determine a client address.
    pub fn rejected() -> Self {
        Self {
            success: false,
            session_key: String::new(),
            already_connected: false,
        }
    }
}

/// Response body for the SET operation (POST /set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResponse {
    pub success: bool,
    pub status: Status,
    /// Validation failure detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SetResponse {
    pub fn stored() -> Self {
        Self {
            success: true,
            status: Status::Success,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            success: false,
            status: Status::Invalid,
            message: Some(message.into()),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            success: false,
            status: Status::Unauthorized,
            message: None,
        }
    }
}

/// Response body for the GET operation (POST /get)
///
/// `value` is present iff `status` is [`Status::Found`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    pub status: Status,
    #[serde(default, with = "base64_option", skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<u8>>,
}

impl GetResponse {
    pub fn found(value: Vec<u8>) -> Self {
        Self {
            status: Status::Found,
            value: Some(value),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            value: None,
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: Status::Unauthorized,
            value: None,
        }
    }
}

/// Response body for the DELETE operation (POST /delete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub found: bool,
    pub status: Status,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            found: true,
            status: Status::Deleted,
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            status: Status::NotFound,
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            found: false,
            status: Status::Unauthorized,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
