use crate::constants::*;
use std::env;

/// How vehicles are booked across clusters within one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FleetPolicy {
    /// Every cluster sees the whole roster; one vehicle may serve many clusters.
    #[default]
    Unlimited,
    /// A vehicle assigned to a cluster is unavailable to later clusters.
    Reserved,
}

impl std::str::FromStr for FleetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unlimited" => Ok(FleetPolicy::Unlimited),
            "reserved" => Ok(FleetPolicy::Reserved),
            _ => Err(format!(
                "Invalid fleet policy: {}. Use 'unlimited' or 'reserved'",
                s
            )),
        }
    }
}

/// Which identifier scheme routes and clusters get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" | "seq" => Ok(IdStrategy::Sequential),
            _ => Err(format!(
                "Invalid id strategy: {}. Use 'uuid' or 'sequential'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub result_cache_ttl: u64,
    pub result_cache_max_entries: u64,
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Region buckets holding more shipments than this are split per city
    pub city_split_threshold: usize,

    /// Hours added at the hub of a two-leg route
    pub hub_transfer_hours: f64,

    /// Fraction of the paired route's cost credited to a backhaul (0.4 = 40%)
    pub backhaul_savings_rate: f64,

    /// Multiplier for lanes only known in the opposite direction
    pub reverse_lane_penalty: f64,

    pub fleet_policy: FleetPolicy,

    pub id_strategy: IdStrategy,

    /// Premium for shipping each item individually, used by the batch summary
    pub baseline_cost_multiplier: f64,

    pub baseline_co2_multiplier: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            city_split_threshold: DEFAULT_CITY_SPLIT_THRESHOLD,
            hub_transfer_hours: DEFAULT_HUB_TRANSFER_HOURS,
            backhaul_savings_rate: DEFAULT_BACKHAUL_SAVINGS_RATE,
            reverse_lane_penalty: DEFAULT_REVERSE_LANE_PENALTY,
            fleet_policy: FleetPolicy::default(),
            id_strategy: IdStrategy::default(),
            baseline_cost_multiplier: DEFAULT_BASELINE_COST_MULTIPLIER,
            baseline_co2_multiplier: DEFAULT_BASELINE_CO2_MULTIPLIER,
        }
    }
}

impl OptimizerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            city_split_threshold: env::var("OPTIMIZER_CITY_SPLIT_THRESHOLD")
                .unwrap_or_else(|_| defaults.city_split_threshold.to_string())
                .parse()
                .map_err(|_| "Invalid OPTIMIZER_CITY_SPLIT_THRESHOLD")?,

            hub_transfer_hours: env::var("OPTIMIZER_HUB_TRANSFER_HOURS")
                .unwrap_or_else(|_| defaults.hub_transfer_hours.to_string())
                .parse()
                .map_err(|_| "Invalid OPTIMIZER_HUB_TRANSFER_HOURS")?,

            backhaul_savings_rate: env::var("OPTIMIZER_BACKHAUL_SAVINGS_RATE")
                .unwrap_or_else(|_| defaults.backhaul_savings_rate.to_string())
                .parse()
                .map_err(|_| "Invalid OPTIMIZER_BACKHAUL_SAVINGS_RATE")?,

            reverse_lane_penalty: env::var("OPTIMIZER_REVERSE_LANE_PENALTY")
                .unwrap_or_else(|_| defaults.reverse_lane_penalty.to_string())
                .parse()
                .map_err(|_| "Invalid OPTIMIZER_REVERSE_LANE_PENALTY")?,

            fleet_policy: env::var("OPTIMIZER_FLEET_POLICY")
                .unwrap_or_else(|_| "unlimited".to_string())
                .parse()?,

            id_strategy: env::var("OPTIMIZER_ID_STRATEGY")
                .unwrap_or_else(|_| "uuid".to_string())
                .parse()?,

            baseline_cost_multiplier: env::var("BASELINE_COST_MULTIPLIER")
                .unwrap_or_else(|_| defaults.baseline_cost_multiplier.to_string())
                .parse()
                .map_err(|_| "Invalid BASELINE_COST_MULTIPLIER")?,

            baseline_co2_multiplier: env::var("BASELINE_CO2_MULTIPLIER")
                .unwrap_or_else(|_| defaults.baseline_co2_multiplier.to_string())
                .parse()
                .map_err(|_| "Invalid BASELINE_CO2_MULTIPLIER")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.city_split_threshold == 0 {
            return Err("OPTIMIZER_CITY_SPLIT_THRESHOLD must be at least 1".to_string());
        }
        if !self.hub_transfer_hours.is_finite() || self.hub_transfer_hours < 0.0 {
            return Err("OPTIMIZER_HUB_TRANSFER_HOURS must be zero or positive".to_string());
        }
        if !(self.backhaul_savings_rate > 0.0 && self.backhaul_savings_rate <= 1.0) {
            return Err("OPTIMIZER_BACKHAUL_SAVINGS_RATE must be in (0, 1]".to_string());
        }
        if !self.reverse_lane_penalty.is_finite() || self.reverse_lane_penalty < 1.0 {
            return Err("OPTIMIZER_REVERSE_LANE_PENALTY must be at least 1".to_string());
        }
        if !self.baseline_cost_multiplier.is_finite() || self.baseline_cost_multiplier < 1.0 {
            return Err("BASELINE_COST_MULTIPLIER must be at least 1".to_string());
        }
        if !self.baseline_co2_multiplier.is_finite() || self.baseline_co2_multiplier < 1.0 {
            return Err("BASELINE_CO2_MULTIPLIER must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let result_cache_max_entries: u64 = env::var("RESULT_CACHE_MAX_ENTRIES")
            .unwrap_or_else(|_| DEFAULT_RESULT_CACHE_MAX_ENTRIES.to_string())
            .parse()
            .map_err(|_| "Invalid RESULT_CACHE_MAX_ENTRIES")?;

        if result_cache_max_entries == 0 {
            return Err("RESULT_CACHE_MAX_ENTRIES must be at least 1".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            result_cache_ttl: env::var("RESULT_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_RESULT_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid RESULT_CACHE_TTL")?,
            result_cache_max_entries,
            optimizer: OptimizerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
