//! HTTP failure mapping into the crate error taxonomy.
//!
//! Connection-level failures and HTTP 429 collapse into the read-only
//! connection error; 422 bodies are mined for field-level validation
//! messages and the structured approval-balance payload; 403 becomes the
//! role-specific message; everything else degrades to the generic gateway
//! error for the operation.

use serde_json::Value;

use crate::errors::{Error, FieldError};

/// The labels an operation carries into error messages.
#[derive(Debug, Clone, Copy)]
pub struct Op {
    /// Gerund for the generic message, e.g. `"approving"`
    pub gerund: &'static str,
    /// Base verb for the 403 message, e.g. `"approve"`
    pub base: &'static str,
    /// Entity label, e.g. `"budget requests"`
    pub entity: &'static str,
}

impl Op {
    const fn generic(self) -> Error {
        Error::Gateway {
            verb: self.gerund,
            entity: self.entity,
        }
    }
}

/// Maps a ureq failure into the crate taxonomy.
pub fn map_ureq_error(op: Op, error: ureq::Error) -> Error {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            map_status_failure(op, code, &body)
        }
        ureq::Error::Transport(transport) => Error::Connection {
            detail: transport.to_string(),
        },
    }
}

/// Maps an HTTP error status plus body into the crate taxonomy.
#[must_use]
pub fn map_status_failure(op: Op, code: u16, body: &str) -> Error {
    match code {
        401 => Error::Authorization,
        403 => Error::Forbidden {
            action: format!("{} {}", op.base, op.entity),
        },
        429 => Error::Connection {
            detail: "HTTP 429: rate limited".to_string(),
        },
        422 => map_unprocessable(op, body),
        _ => op.generic(),
    }
}

fn map_unprocessable(op: Op, body: &str) -> Error {
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return op.generic();
    };

    // Approval balance failures carry a structured payload, sometimes
    // nested under an "error" key
    let balance = payload.get("error").unwrap_or(&payload);
    if let Some(insufficient) = parse_balance_payload(balance) {
        return insufficient;
    }

    if let Some(errors) = payload.get("errors").and_then(Value::as_object) {
        let mut fields = Vec::with_capacity(errors.len());
        for (field, messages) in errors {
            for message in flatten_messages(messages) {
                fields.push(FieldError {
                    field: field.clone(),
                    message,
                });
            }
        }
        if !fields.is_empty() {
            return Error::Validation { errors: fields };
        }
    }

    op.generic()
}

fn parse_balance_payload(value: &Value) -> Option<Error> {
    let requested = value.get("requested").and_then(Value::as_f64)?;
    let available = value.get("available").and_then(Value::as_f64)?;
    let budget_type = value
        .get("budget_type")
        .and_then(Value::as_str)
        .unwrap_or("total")
        .to_string();
    let department = value
        .get("department")
        .and_then(Value::as_str)
        .map(ToString::to_string);
    Some(Error::InsufficientBudget {
        requested,
        available,
        budget_type,
        department,
    })
}

fn flatten_messages(messages: &Value) -> Vec<String> {
    match messages {
        Value::String(message) => vec![message.clone()],
        Value::Array(list) => list
            .iter()
            .filter_map(Value::as_str)
            .map(ToString::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
