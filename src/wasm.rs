//! WebAssembly bindings for browser front-ends.
//!
//! Values cross the boundary as plain JS objects shaped like the serde
//! representation of the Rust types (camelCase field names).

use std::sync::Once;

use log::info;
use wasm_bindgen::prelude::*;

use crate::models::{Coordinates, Location, NewLocation};
use crate::optimizer::{OptimizerConfig, RouteOptimizer};
use crate::session::{LocationStore, RouteSession, RouteStatus};

static START: Once = Once::new();

fn init_logging() {
    START.call_once(|| {
        // a logger may already be installed by the host page
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

fn err_to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn optimizer_from(config: JsValue) -> Result<RouteOptimizer, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(RouteOptimizer::default());
    }
    let config: OptimizerConfig = serde_wasm_bindgen::from_value(config)?;
    RouteOptimizer::new(config).map_err(err_to_js)
}

/// Orders `locations` (an array of `Location` objects) and returns a
/// `RouteResult` object. `config` may be `undefined` for defaults.
#[wasm_bindgen(js_name = computeRoute)]
pub fn compute_route(
    locations: JsValue,
    start_hint: Option<String>,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    init_logging();
    let locations: Vec<Location> = serde_wasm_bindgen::from_value(locations)?;
    let optimizer = optimizer_from(config)?;
    let result = optimizer
        .compute_route(&locations, start_hint.as_deref())
        .map_err(err_to_js)?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Haversine distance in km on the mean Earth radius.
#[wasm_bindgen(js_name = distanceKm)]
pub fn distance_km(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    crate::distance::haversine_distance(
        Coordinates::new(lat_a, lng_a),
        Coordinates::new(lat_b, lng_b),
    )
}

/// Stateful planner backing a page: locations, selection and route.
#[wasm_bindgen]
pub struct JsRoutePlanner {
    session: RouteSession,
}

#[wasm_bindgen]
impl JsRoutePlanner {
    /// Creates a planner; `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, demo_locations: bool) -> Result<JsRoutePlanner, JsValue> {
        init_logging();
        let store = if demo_locations {
            LocationStore::with_demo_locations()
        } else {
            LocationStore::new()
        };
        info!("Route planner started with {} locations", store.len());
        Ok(Self {
            session: RouteSession::new(store, optimizer_from(config)?),
        })
    }

    /// Adds `{ name, address?, coordinates }` and returns the new ID.
    #[wasm_bindgen(js_name = addLocation)]
    pub fn add_location(&mut self, location: JsValue) -> Result<String, JsValue> {
        let location: NewLocation = serde_wasm_bindgen::from_value(location)?;
        Ok(self.session.add_location(location))
    }

    /// Removes a location by ID. Returns `false` for unknown IDs.
    #[wasm_bindgen(js_name = removeLocation)]
    pub fn remove_location(&mut self, id: &str) -> bool {
        self.session.remove_location(id).is_some()
    }

    /// Selects the preferred start location.
    #[wasm_bindgen(js_name = selectLocation)]
    pub fn select_location(&mut self, id: &str) -> bool {
        self.session.select_location(id)
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.store().list())?)
    }

    /// Computes the route and returns the `RouteResult`.
    pub fn calculate(&mut self) -> Result<JsValue, JsValue> {
        let result = self.session.calculate().map_err(err_to_js)?;
        Ok(serde_wasm_bindgen::to_value(result)?)
    }

    /// Drops the computed route and the selection.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// The current `RouteResult`, or `undefined`.
    #[wasm_bindgen(js_name = currentResult)]
    pub fn current_result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.current_result())?)
    }

    /// One of `idle`, `calculating`, `ready`, `failed`.
    pub fn status(&self) -> String {
        match self.session.status() {
            RouteStatus::Idle => "idle",
            RouteStatus::Calculating => "calculating",
            RouteStatus::Ready => "ready",
            RouteStatus::Failed => "failed",
        }
        .to_string()
    }

    /// Legs of the current route, or an empty array.
    pub fn directions(&self) -> Result<JsValue, JsValue> {
        let legs = self
            .session
            .current_result()
            .map(|r| self.session.optimizer().directions(r))
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&legs)?)
    }

    /// Analytics of the current route, or `undefined`.
    pub fn analytics(&self) -> Result<JsValue, JsValue> {
        let stats = self
            .session
            .current_result()
            .map(|r| self.session.optimizer().analyze(r));
        Ok(serde_wasm_bindgen::to_value(&stats)?)
    }
}
