//! Output rendering for the CLI
//!
//! The server's JSON is relayed verbatim: two-space indentation, field
//! ordering preserved (serde_json is built with `preserve_order`).

use anyhow::Result;
use serde_json::Value;

/// Render a JSON value the way the CLI prints it, minus the trailing
/// newline that `println!` adds.
pub fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
