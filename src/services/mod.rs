pub mod cost_model;
pub mod fleet;
pub mod gazetteer;
pub mod geojson_export;
pub mod optimizer;
pub mod shipment_import;
