//! Pure helpers for extracting typed parameters from a `serde_json::Value`.
//!
//! Each helper takes a JSON object, a key name, and a default. If the key is
//! missing or the value has the wrong shape, the default is returned — these
//! never fail, so a scene constructed from partial JSON always gets a usable
//! configuration (validation of the resulting values happens separately).

use crate::color::Rgba;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. JSON integers convert to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or
/// wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing
/// or wrong type.
pub fn param_str(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts an [`Rgba`] from a hex string at `params[name]`, returning
/// `default` if the key is missing or the string does not parse.
pub fn param_color(params: &Value, name: &str, default: Rgba) -> Rgba {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Rgba::from_hex(s).ok())
        .unwrap_or(default)
}
