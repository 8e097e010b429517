//! Wire DTOs for the REST endpoints the shell consumes.
//!
//! DESIGN
//! ======
//! Only the fields the navigation shell reads are modeled. Unknown fields are
//! ignored so the upstream API can grow without breaking hydration.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// A bot owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSummary {
    /// Bot identifier. Accepts either a JSON string or an integer.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response body of `GET /api/bots`.
///
/// A missing or `null` `bots` key is treated as an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotListResponse {
    #[serde(default, deserialize_with = "deserialize_bots")]
    pub bots: Vec<BotSummary>,
}

fn deserialize_bots<'de, D>(deserializer: D) -> Result<Vec<BotSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<BotSummary>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
