//! Terraform state parsing and root-module lookup
//!
//! States are handled as untyped JSON: only the root module outputs are
//! consumed and the rest of the document is never interpreted.

use log::debug;
use serde_json::{Map, Value};

use crate::error::{ChError, Result};

/// Message reported for a state object that is not JSON
pub(crate) const MALFORMED_BODY: &str = "Malformed S3 response body.";

/// Message reported for JSON that is not a usable Terraform state
pub(crate) const MALFORMED_STATE: &str = "Malformed Terraform state.";

/// Terraform module path of the root module in legacy states
const ROOT_MODULE_PATH: &str = "root";

/// Root module outputs, keyed by output name
pub type Outputs = Map<String, Value>;

/// Parse a downloaded state object
pub fn parse_state(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| {
        ChError::MalformedResponse(format!("{}\n{}", e, MALFORMED_BODY))
    })
}

/// Locate the outputs of the root module.
///
/// Legacy states list modules with a `path`; the entry whose path is exactly
/// `["root"]` wins. States that have no `modules` field but carry a top-level
/// `outputs` object (format version 4 and later) already hold root outputs.
pub fn root_outputs(state: &Value) -> Result<&Outputs> {
    let malformed = || ChError::MalformedState(MALFORMED_STATE.to_string());

    match state.get("modules") {
        Some(Value::Array(modules)) => modules
            .iter()
            .find(|module| is_root_module(module))
            .and_then(|module| module.get("outputs"))
            .and_then(Value::as_object)
            .ok_or_else(malformed),
        Some(_) => Err(malformed()),
        None => {
            debug!("State has no modules, trying top-level outputs");
            state
                .get("outputs")
                .and_then(Value::as_object)
                .ok_or_else(malformed)
        }
    }
}

fn is_root_module(module: &Value) -> bool {
    match module.get("path").and_then(Value::as_array) {
        Some(path) => path.len() == 1 && path[0].as_str() == Some(ROOT_MODULE_PATH),
        None => false,
    }
}
