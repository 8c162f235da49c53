//! Stable application-wide constants.
//!
//! Values here are the fixed coefficients of the freight cost model and the
//! default fallbacks for env-var-based configuration. They should rarely change.
//! For knobs that benefit from runtime experimentation, see
//! [`OptimizerConfig`](crate::config::OptimizerConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Result cache defaults ---

/// Default optimization result cache TTL: 1 hour. Overridden by `RESULT_CACHE_TTL`.
pub const DEFAULT_RESULT_CACHE_TTL_SECONDS: u64 = 3_600;
/// Maximum cached batch results (LRU eviction). Overridden by `RESULT_CACHE_MAX_ENTRIES`.
pub const DEFAULT_RESULT_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Geometry ---

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Mode selection thresholds (km) ---

/// Below this distance every leg goes by truck.
pub const TRUCK_MAX_DISTANCE_KM: u32 = 1000;
/// Above this distance a leg is treated as long haul (ship or plane).
pub const LONG_HAUL_DISTANCE_KM: u32 = 8000;
/// Minimum distance for an ocean crossing to go by ship rather than plane.
pub const OCEAN_SHIPPING_MIN_DISTANCE_KM: u32 = 2000;

// --- Flat per-km rates per transport mode ---

pub const TRUCK_COST_PER_KM: f64 = 0.8;
pub const PLANE_COST_PER_KM: f64 = 8.5;
pub const SHIP_COST_PER_KM: f64 = 0.4;

/// Average speeds (km/h) used for transit time.
pub const TRUCK_SPEED_KMH: f64 = 80.0;
pub const PLANE_SPEED_KMH: f64 = 800.0;
pub const SHIP_SPEED_KMH: f64 = 35.0;

/// Fixed airport handling overhead added to every plane leg (hours).
pub const PLANE_AIRPORT_OVERHEAD_HOURS: f64 = 4.0;

/// Emissions per km (kg CO2).
pub const TRUCK_CO2_PER_KM: f64 = 0.1;
pub const PLANE_CO2_PER_KM: f64 = 0.5;
pub const SHIP_CO2_PER_KM: f64 = 0.03;

// --- Optimizer defaults (overridable through OptimizerConfig) ---

/// Region buckets with more shipments than this are split per city.
pub const DEFAULT_CITY_SPLIT_THRESHOLD: usize = 10;
/// Dwell time at a transfer hub (hours).
pub const DEFAULT_HUB_TRANSFER_HOURS: f64 = 3.0;
/// Share of the paired route's cost saved by a backhaul.
pub const DEFAULT_BACKHAUL_SAVINGS_RATE: f64 = 0.4;
/// Multiplier applied when a lane is only known in the opposite direction.
pub const DEFAULT_REVERSE_LANE_PENALTY: f64 = 1.1;
/// Cost premium of shipping every item on its own (baseline comparison).
pub const DEFAULT_BASELINE_COST_MULTIPLIER: f64 = 1.5;
/// Emissions premium of shipping every item on its own (baseline comparison).
pub const DEFAULT_BASELINE_CO2_MULTIPLIER: f64 = 1.3;

/// Most vehicles one cluster may book before the rest is left unserved.
pub const MAX_VEHICLES_PER_CLUSTER: usize = 100;

// --- Shipment volume ---

/// Dimensions are given in cm; this converts cm³ to m³.
pub const CUBIC_CM_PER_CUBIC_M: f64 = 1_000_000.0;
/// Density assumed when dimensions are missing: 1000 kg fill one m³.
pub const FALLBACK_KG_PER_CUBIC_M: f64 = 1000.0;

// --- CSV import ---

/// Largest batch accepted from a single CSV upload.
pub const MAX_IMPORT_SHIPMENTS: usize = 1_000;
