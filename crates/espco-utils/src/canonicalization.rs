//! Canonical JSON emission
//!
//! Quotes and catalog listings are emitted in JCS (RFC 8785) form so that
//! identical orders always print byte-identical JSON.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize `value` as JCS canonical JSON.
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        zeta: u32,
        alpha: &'static str,
    }

    #[test]
    fn test_keys_are_sorted() {
        let out = emit_jcs(&Sample {
            zeta: 1,
            alpha: "Small Box (12×12×4)",
        })
        .unwrap();
        assert_eq!(out, r#"{"alpha":"Small Box (12×12×4)","zeta":1}"#);
    }
}
