//! CSV shipment manifests.
//!
//! The first row holds headers. Required columns are Origin, Destination,
//! Weight and Dimensions; header names are matched case-insensitively on
//! their letters and digits only, so "Weight (kg)" reads as Weight. Bad rows
//! are reported and skipped, the rest of the file is still imported.

use crate::constants::MAX_IMPORT_SHIPMENTS;
use crate::error::{AppError, Result};
use crate::models::{Shipment, ShipmentPriority, TemperatureRange};
use crate::services::gazetteer::resolve_coordinates;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Read;

/// Problem with one CSV row. Rows are 1-based and the header is row 1.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipmentUploadResult {
    pub shipments: Vec<Shipment>,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub errors: Vec<RowError>,
    /// Source row of each entry in `shipments`
    #[serde(skip)]
    rows: Vec<usize>,
}

impl ShipmentUploadResult {
    /// Move shipments with an unknown origin or destination into `errors`
    pub fn reject_unresolvable(&mut self) -> usize {
        let shipments = std::mem::take(&mut self.shipments);
        let rows = std::mem::take(&mut self.rows);
        let mut rejected = 0;

        for (shipment, row) in shipments.into_iter().zip(rows) {
            match unresolved_location(&shipment) {
                Some(location) => {
                    tracing::warn!(
                        row,
                        shipment = %shipment.id,
                        location,
                        "Skipping unresolvable shipment"
                    );
                    self.errors.push(RowError {
                        row,
                        message: format!("unknown location '{}'", location),
                    });
                    rejected += 1;
                }
                None => {
                    self.shipments.push(shipment);
                    self.rows.push(row);
                }
            }
        }

        self.errors.sort_by_key(|e| e.row);
        self.valid_count -= rejected;
        self.invalid_count += rejected;
        rejected
    }
}

/// A shipment left out because one of its locations is unknown
#[derive(Debug, Clone, Serialize)]
pub struct UnresolvedShipment {
    pub shipment: Shipment,
    pub location: String,
}

/// Split shipments into those whose origin and destination both resolve and
/// the rest, keeping input order on both sides
pub fn partition_resolvable(shipments: Vec<Shipment>) -> (Vec<Shipment>, Vec<UnresolvedShipment>) {
    let mut resolvable = Vec::new();
    let mut unresolved = Vec::new();

    for shipment in shipments {
        match unresolved_location(&shipment).map(str::to_string) {
            Some(location) => unresolved.push(UnresolvedShipment { shipment, location }),
            None => resolvable.push(shipment),
        }
    }

    (resolvable, unresolved)
}

fn unresolved_location(shipment: &Shipment) -> Option<&str> {
    [shipment.origin.as_str(), shipment.destination.as_str()]
        .into_iter()
        .find(|name| resolve_coordinates(name).is_none())
}

pub struct ShipmentImporter;

impl ShipmentImporter {
    pub fn parse<R: Read>(reader: R) -> Result<ShipmentUploadResult> {
        let mut csv = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::from_headers(csv.headers()?)?;

        let mut result = ShipmentUploadResult {
            shipments: Vec::new(),
            valid_count: 0,
            invalid_count: 0,
            errors: Vec::new(),
            rows: Vec::new(),
        };
        let mut seen_ids = HashSet::new();

        for (index, record) in csv.byte_records().enumerate() {
            if index >= MAX_IMPORT_SHIPMENTS {
                return Err(AppError::InvalidRequest(format!(
                    "CSV holds more than {} shipments",
                    MAX_IMPORT_SHIPMENTS
                )));
            }

            let row = index + 2;
            let parsed = StringRecord::from_byte_record(record?)
                .map_err(|e| format!("invalid UTF-8 in column {}", e.utf8_error().field() + 1))
                .and_then(|record| columns.shipment(&record, row))
                .and_then(|shipment| {
                    if seen_ids.insert(shipment.id.clone()) {
                        Ok(shipment)
                    } else {
                        Err(format!("duplicate shipment id '{}'", shipment.id))
                    }
                });

            match parsed {
                Ok(shipment) => {
                    result.shipments.push(shipment);
                    result.rows.push(row);
                    result.valid_count += 1;
                }
                Err(message) => {
                    tracing::warn!(row, error = %message, "Skipping invalid CSV row");
                    result.errors.push(RowError { row, message });
                    result.invalid_count += 1;
                }
            }
        }

        tracing::debug!(
            valid = result.valid_count,
            invalid = result.invalid_count,
            "Parsed shipment CSV"
        );

        Ok(result)
    }

    pub fn parse_str(input: &str) -> Result<ShipmentUploadResult> {
        Self::parse(input.as_bytes())
    }
}

/// Column positions resolved from the header row
struct Columns {
    origin: usize,
    destination: usize,
    weight: usize,
    dimensions: usize,
    id: Option<usize>,
    description: Option<usize>,
    priority: Option<usize>,
    deadline: Option<usize>,
    fragile: Option<usize>,
    hazardous: Option<usize>,
    temp_min: Option<usize>,
    temp_max: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();

        Ok(Columns {
            origin: require(&names, "Origin", &["origin"])?,
            destination: require(&names, "Destination", &["destination"])?,
            weight: require(&names, "Weight", &["weight", "weightkg"])?,
            dimensions: require(&names, "Dimensions", &["dimensions", "dimensionscm"])?,
            id: find(&names, &["id", "shipmentid"]),
            description: find(&names, &["description"]),
            priority: find(&names, &["priority"]),
            deadline: find(&names, &["deadline"]),
            fragile: find(&names, &["fragile"]),
            hazardous: find(&names, &["hazardous"]),
            temp_min: find(&names, &["tempmin", "mintemp", "temperaturemin"]),
            temp_max: find(&names, &["tempmax", "maxtemp", "temperaturemax"]),
        })
    }

    fn shipment(&self, record: &StringRecord, row: usize) -> std::result::Result<Shipment, String> {
        let field = |index: usize| record.get(index).unwrap_or("").trim();
        let optional = |index: Option<usize>| index.map(field).filter(|v| !v.is_empty());

        let weight_raw = field(self.weight);
        let weight: f64 = weight_raw
            .parse()
            .map_err(|_| format!("invalid weight '{}'", weight_raw))?;

        let id = optional(self.id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("shipment-{}", row));

        let mut shipment = Shipment::new(
            id,
            field(self.origin),
            field(self.destination),
            weight,
            field(self.dimensions),
        );

        shipment.description = optional(self.description).map(str::to_string);
        shipment.deadline = optional(self.deadline).map(str::to_string);
        shipment.priority = optional(self.priority)
            .map(str::parse::<ShipmentPriority>)
            .transpose()?;
        shipment.fragile = parse_flag("Fragile", optional(self.fragile))?;
        shipment.hazardous = parse_flag("Hazardous", optional(self.hazardous))?;
        shipment.temperature = match (optional(self.temp_min), optional(self.temp_max)) {
            (None, None) => None,
            (Some(min), Some(max)) => Some(TemperatureRange {
                min: parse_number("TempMin", min)?,
                max: parse_number("TempMax", max)?,
            }),
            _ => return Err("temperature range needs both TempMin and TempMax".to_string()),
        };

        shipment.validate()?;
        Ok(shipment)
    }
}

fn find(names: &[String], aliases: &[&str]) -> Option<usize> {
    names.iter().position(|n| aliases.contains(&n.as_str()))
}

fn require(names: &[String], column: &str, aliases: &[&str]) -> Result<usize> {
    find(names, aliases).ok_or_else(|| {
        AppError::InvalidRequest(format!("CSV is missing required column '{}'", column))
    })
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_flag(column: &str, value: Option<&str>) -> std::result::Result<bool, String> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(format!("invalid {} value '{}'", column, value)),
    }
}

fn parse_number(column: &str, value: &str) -> std::result::Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid {} value '{}'", column, value))
}
