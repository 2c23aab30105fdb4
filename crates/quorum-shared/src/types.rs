use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a conversation, unique within its scope.
///
/// The backend emits ids as JSON numbers in list responses and as JSON
/// strings in a few creation responses, so deserialization accepts both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(#[serde(deserialize_with = "string_or_i64")] pub i64);

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a message, unique within its conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(#[serde(deserialize_with = "string_or_i64")] pub i64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Filter context for a conversation listing: one group, or everything
/// (the administrator view).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    All,
    Group(String),
}

impl Scope {
    /// Group slug to send as the `scope` query parameter, if any.
    pub fn group_slug(&self) -> Option<&str> {
        match self {
            Scope::All => None,
            Scope::Group(slug) => Some(slug),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::All => write!(f, "all"),
            Scope::Group(slug) => write!(f, "{slug}"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(i64),
    Str(String),
}

/// Accept a JSON number or a numeric JSON string.
pub fn string_or_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: {s:?}"))),
    }
}

/// Like [`string_or_i64`] but tolerant: missing, null or unparsable ids
/// become `None` instead of failing the whole payload.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumOrStr> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumOrStr::Num(n)) => Some(n),
        Some(NumOrStr::Str(s)) => s.trim().parse::<i64>().ok(),
        None => None,
    })
}
