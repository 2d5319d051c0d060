use crate::conversation::QueuedConversation;
use crate::error::{ApiError, Result};
use crate::user::NexmoUser;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Fallible construction of a domain type from a decoded JSON object.
///
/// Implementations fail with [`ApiError::InvalidResponse`] when required
/// fields are absent or mistyped.
pub trait FromJson: Sized {
    fn from_json(json: &Map<String, Value>) -> Result<Self>;
}

/// Deserialize a JSON object into any serde type, mapping failures to
/// [`ApiError::InvalidResponse`].
pub fn from_json_object<T>(json: &Map<String, Value>) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(json.clone()))
        .map_err(|e| ApiError::invalid_response(e.to_string()))
}

/// Identifiers needed to whisper to an agent before bridging a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhisperInfo {
    pub conversation_id: String,
    pub customer_leg_id: String,
    pub agent_leg_id: String,
}

impl From<WhisperInfo> for (String, String, String) {
    fn from(info: WhisperInfo) -> Self {
        (info.conversation_id, info.customer_leg_id, info.agent_leg_id)
    }
}

/// Parse a raw payload and require a JSON object at the top level.
pub fn parse_object(payload: &[u8]) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_slice(payload)
        .map_err(|e| ApiError::invalid_response(format!("payload is not JSON: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::invalid_response(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Decode the `/api/jwt` payload: the whole object is the user.
pub fn decode_user(payload: &[u8]) -> Result<NexmoUser> {
    let json = parse_object(payload)?;
    NexmoUser::from_json(&json)
}

/// Decode the `/api/whisper` payload: three string-valued ids.
pub fn decode_whisper_info(payload: &[u8]) -> Result<WhisperInfo> {
    let json = parse_object(payload)?;

    Ok(WhisperInfo {
        conversation_id: required_string(&json, "conversation_id")?,
        customer_leg_id: required_string(&json, "customer_leg_id")?,
        agent_leg_id: required_string(&json, "agent_leg_id")?,
    })
}

/// Decode the `/api/queue` payload.
///
/// `conversations` must be an array of objects. Entries that fail to
/// construct are dropped, so the result may be shorter than the input
/// array, or empty.
pub fn decode_conversation_queue(payload: &[u8]) -> Result<Vec<QueuedConversation>> {
    let json = parse_object(payload)?;

    let entries = json
        .get("conversations")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::invalid_response("missing or non-array field `conversations`"))?;

    let objects = entries
        .iter()
        .map(Value::as_object)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ApiError::invalid_response("`conversations` contains a non-object entry"))?;

    let conversations = objects
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match QueuedConversation::from_json(entry) {
            Ok(conversation) => Some(conversation),
            Err(e) => {
                warn!(index, error = %e, "dropping malformed queue entry");
                None
            }
        })
        .collect();

    Ok(conversations)
}

fn required_string(json: &Map<String, Value>, field: &str) -> Result<String> {
    json.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::invalid_response(format!("missing or non-string field `{}`", field)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
