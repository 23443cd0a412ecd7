//! C ABI for native hosts.
//!
//! A single JSON-in/JSON-out entry point:
//!
//! ```text
//! request:  { "locations": [...], "startHint": "id"?, "config": {...}? }
//! response: { "ok": true, "result": {...} } | { "ok": false, "error": "..." }
//! ```
//!
//! Strings returned by this module must be released with
//! [`route_planner_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::{Deserialize, Serialize};

use crate::models::{Location, RouteResult};
use crate::optimizer::{OptimizerConfig, RouteOptimizer};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComputeRequest {
    locations: Vec<Location>,
    #[serde(default)]
    start_hint: Option<String>,
    #[serde(default)]
    config: OptimizerConfig,
}

#[derive(Debug, Serialize)]
struct ComputeResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<RouteResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComputeResponse {
    fn failure(error: impl ToString) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Runs a JSON compute request and returns the JSON response.
pub fn compute_json(request: &str) -> String {
    let response = match serde_json::from_str::<ComputeRequest>(request) {
        Ok(request) => match RouteOptimizer::new(request.config)
            .and_then(|opt| opt.compute_route(&request.locations, request.start_hint.as_deref()))
        {
            Ok(result) => ComputeResponse {
                ok: true,
                result: Some(result),
                error: None,
            },
            Err(err) => ComputeResponse::failure(err),
        },
        Err(err) => ComputeResponse::failure(format!("malformed request: {err}")),
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"ok":false,"error":"unserializable response"}"#.to_string())
}

/// Computes a route from a NUL-terminated UTF-8 JSON request.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string. The
/// returned pointer must be freed with [`route_planner_free_string`].
#[no_mangle]
pub unsafe extern "C" fn route_planner_compute_json(request: *const c_char) -> *mut c_char {
    let response = if request.is_null() {
        serde_json::to_string(&ComputeResponse::failure("null request")).unwrap_or_default()
    } else {
        match CStr::from_ptr(request).to_str() {
            Ok(text) => compute_json(text),
            Err(err) => serde_json::to_string(&ComputeResponse::failure(err)).unwrap_or_default(),
        }
    };
    // serde_json escapes NUL, so the conversion only fails on a logic error
    CString::new(response).unwrap_or_default().into_raw()
}

/// Releases a string returned by [`route_planner_compute_json`].
///
/// # Safety
///
/// `s` must be null or a pointer obtained from this module that has not been
/// freed yet.
#[no_mangle]
pub unsafe extern "C" fn route_planner_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
