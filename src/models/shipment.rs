use crate::constants::{CUBIC_CM_PER_CUBIC_M, FALLBACK_KG_PER_CUBIC_M};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for ShipmentPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentPriority::Low => write!(f, "low"),
            ShipmentPriority::Medium => write!(f, "medium"),
            ShipmentPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for ShipmentPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ShipmentPriority::Low),
            "medium" | "normal" => Ok(ShipmentPriority::Medium),
            "high" | "urgent" => Ok(ShipmentPriority::High),
            _ => Err(format!("Invalid priority: '{}'", s)),
        }
    }
}

/// Required temperature band (°C) for cold-chain cargo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// A single consignment submitted for batch optimization.
///
/// Locations are free-form names ("City, Country") resolved against the
/// gazetteer; `dimensions` is "LxWxH" in cm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shipment {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Weight in kg
    pub weight: f64,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ShipmentPriority>,
    /// ISO date string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default)]
    pub hazardous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureRange>,
}

impl Shipment {
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
        dimensions: impl Into<String>,
    ) -> Self {
        Shipment {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            weight,
            dimensions: dimensions.into(),
            description: None,
            priority: None,
            deadline: None,
            fragile: false,
            hazardous: false,
            temperature: None,
        }
    }

    /// Volume in m³ from the "LxWxH" dimensions, falling back to
    /// `weight / 1000` when they are missing or unparsable
    pub fn volume_m3(&self) -> f64 {
        parse_dimensions_cm(&self.dimensions)
            .map(|(l, w, h)| l * w * h / CUBIC_CM_PER_CUBIC_M)
            .unwrap_or(self.weight / FALLBACK_KG_PER_CUBIC_M)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("shipment id must not be empty".to_string());
        }
        if self.origin.trim().is_empty() {
            return Err(format!("shipment {}: origin must not be empty", self.id));
        }
        if self.destination.trim().is_empty() {
            return Err(format!(
                "shipment {}: destination must not be empty",
                self.id
            ));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(format!(
                "shipment {}: weight must be a positive number of kg, got {}",
                self.id, self.weight
            ));
        }
        if let Some(range) = self.temperature {
            if range.min > range.max {
                return Err(format!(
                    "shipment {}: temperature min {} exceeds max {}",
                    self.id, range.min, range.max
                ));
            }
        }
        Ok(())
    }
}

/// Parse "LxWxH" (spaces allowed, `x` or `X`, optional `cm` after each side)
/// into three positive lengths whose product is finite
fn parse_dimensions_cm(dimensions: &str) -> Option<(f64, f64, f64)> {
    let compact: String = dimensions
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let parts: Vec<f64> = compact
        .split('x')
        .map(|part| {
            part.strip_suffix("cm")
                .unwrap_or(part)
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
        })
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        [l, w, h] if (l * w * h).is_finite() => Some((*l, *w, *h)),
        _ => None,
    }
}
