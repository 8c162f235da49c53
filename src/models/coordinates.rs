use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

/// Convert radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Great-circle distance between two points, rounded to the nearest km
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> u32 {
    a.distance_to(b).round() as u32
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = deg_to_rad(self.lat);
        let lat2_rad = deg_to_rad(other.lat);
        let delta_lat = deg_to_rad(other.lat - self.lat);
        let delta_lng = deg_to_rad(other.lng - self.lng);

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Arithmetic mean of a set of points; `None` for an empty set
    pub fn mean(points: &[Coordinates]) -> Option<Coordinates> {
        if points.is_empty() {
            return None;
        }

        let n = points.len() as f64;
        let (sum_lat, sum_lng) = points
            .iter()
            .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));

        Some(Coordinates {
            lat: sum_lat / n,
            lng: sum_lng / n,
        })
    }
}
