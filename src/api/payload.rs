use actix_web::{web, HttpMessage, HttpRequest};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Request body read as JSON or as an urlencoded form
#[derive(Debug, PartialEq)]
pub enum Body {
    /// No body, a blank body, `{}` or a form with no fields
    Empty,
    Fields(Map<String, Value>),
    /// A body was sent but could not be read as an object
    Invalid(String),
}

pub fn parse_body(req: &HttpRequest, bytes: &[u8]) -> Body {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Body::Empty;
    }

    let fields = match req.content_type() {
        "application/x-www-form-urlencoded" => match parse_form(bytes) {
            Ok(fields) => fields,
            Err(e) => return Body::Invalid(e),
        },
        // A missing content type is read as JSON
        "" | "application/json" => match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Body::Invalid("request body must be a JSON object".to_string()),
            Err(e) => return Body::Invalid(e.to_string()),
        },
        other => return Body::Invalid(format!("unsupported content type '{}'", other)),
    };

    if fields.is_empty() {
        Body::Empty
    } else {
        Body::Fields(fields)
    }
}

fn parse_form(bytes: &[u8]) -> Result<Map<String, Value>, String> {
    let raw = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
    let form = web::Query::<HashMap<String, String>>::from_query(raw.trim()).map_err(|e| e.to_string())?;

    Ok(form
        .into_inner()
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect())
}
