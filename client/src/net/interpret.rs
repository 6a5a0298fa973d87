//! Response interpretation for lead-search replies.
//!
//! A reply is one of three things: a business-level error the engine wants
//! shown verbatim, a (possibly empty) list of leads, or something that
//! matches neither shape. The last case is reported as a transport-class
//! failure so it can never masquerade as "no results".

#[cfg(test)]
#[path = "interpret_test.rs"]
mod interpret_test;

use serde_json::Value;

use super::api::TransportError;
use super::types::{RawLead, ResponsePayload};

/// Result of interpreting one well-formed reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The engine reported an error; `message` is shown as-is.
    ServiceError { message: String },
    /// The engine returned leads. An empty list means "no results".
    Leads { leads: Vec<RawLead> },
}

/// Decode a JSON body into the wire payload.
///
/// # Errors
///
/// Returns [`TransportError::Malformed`] when the body is not an object or
/// its fields have the wrong types.
pub fn parse_payload(body: Value) -> Result<ResponsePayload, TransportError> {
    if !body.is_object() {
        return Err(TransportError::Malformed(format!("expected a JSON object, got {}", json_kind(&body))));
    }
    serde_json::from_value(body).map_err(|e| TransportError::Malformed(e.to_string()))
}

/// Classify a decoded payload.
///
/// A non-empty `error` wins over `message`. An empty `error` with no
/// `message` is treated as malformed.
///
/// # Errors
///
/// Returns [`TransportError::Malformed`] when neither variant is populated.
pub fn interpret(payload: ResponsePayload) -> Result<Outcome, TransportError> {
    if let Some(message) = payload.error.filter(|e| !e.trim().is_empty()) {
        return Ok(Outcome::ServiceError { message });
    }
    match payload.message {
        Some(leads) => Ok(Outcome::Leads { leads }),
        None => Err(TransportError::Malformed("missing both `error` and `message`".to_owned())),
    }
}

/// Parse and classify a raw JSON body in one step.
///
/// # Errors
///
/// See [`parse_payload`] and [`interpret`].
pub fn interpret_body(body: Value) -> Result<Outcome, TransportError> {
    parse_payload(body).and_then(interpret)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
