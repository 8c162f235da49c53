use batchroute::config::OptimizerConfig;
use batchroute::services::geojson_export::routes_to_geojson;
use batchroute::services::optimizer::BatchOptimizer;
use batchroute::services::shipment_import::ShipmentImporter;
use batchroute::summary::{format_summary, BatchOptimizationResult};
use std::env;
use std::fs::File;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: optimize --input=FILE.csv [OPTIONS]

Options:
  --input=FILE          CSV manifest (Origin, Destination, Weight, Dimensions, ...)
  --json                Output the batch result as JSON
  --geojson             Output the optimized route segments as GeoJSON
  --skip-unresolvable   Drop shipments with unknown locations instead of failing
  --help                Show this help message"
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (less verbose for the CLI)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "batchroute=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let Some(input) = args.iter().find_map(|a| a.strip_prefix("--input=")) else {
        print_help();
        std::process::exit(2);
    };
    let json_output = args.iter().any(|a| a == "--json");
    let geojson_output = args.iter().any(|a| a == "--geojson");
    let skip_unresolvable = args.iter().any(|a| a == "--skip-unresolvable");

    dotenv::dotenv().ok();
    let config = OptimizerConfig::from_env().map_err(|e| format!("Config error: {}", e))?;

    let file = File::open(input).map_err(|e| format!("Cannot open {}: {}", input, e))?;
    let mut upload = ShipmentImporter::parse(file)?;
    if skip_unresolvable {
        upload.reject_unresolvable();
    }

    for error in &upload.errors {
        eprintln!("row {}: {}", error.row, error.message);
    }
    eprintln!(
        "Imported {} shipments ({} rejected)",
        upload.valid_count, upload.invalid_count
    );

    let optimizer = BatchOptimizer::new(config.clone());
    let routes = match optimizer.optimize(&upload.shipments) {
        Ok(routes) => routes,
        Err(e) => {
            eprintln!("Batch failed: {}", e);
            eprintln!("Re-run with --skip-unresolvable to optimize the remaining shipments.");
            std::process::exit(1);
        }
    };

    let result = BatchOptimizationResult::compute(&upload.shipments, routes, &config);

    if geojson_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&routes_to_geojson(&result.routes))?
        );
    } else if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_summary(&result));
    }

    Ok(())
}
