//! japan-mesh - writes the meshes of one order to a file.
//!
//! ```text
//! japan-mesh 3 -e 139.0,35.0 140.0,36.0 -d out
//! ```

use clap::{Parser, ValueEnum};
use japan_mesh_rs::{
    ExportConfig, GeometryFormat, MeshError, OutputFormat, export_meshes, parse_extent,
    parse_mesh_order,
};
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Debug, Clone, ValueEnum)]
enum FormatArg {
    /// Line-delimited GeoJSON, one Feature per line
    Geojsonl,
    /// CSV with code, order, x, y and geometry columns
    Csv,
}

#[derive(Debug, Clone, ValueEnum)]
enum GeometryArg {
    /// Well-Known Text
    Wkt,
    /// GeoJSON geometry object
    Geojson,
}

#[derive(Parser)]
#[command(name = "japan-mesh")]
#[command(about = "Generate Japanese standard regional mesh (JIS X 0410) files", long_about = None)]
struct Args {
    /// Mesh order: 1-10, or one of 500m, 250m, 125m, 100m, 50m, 10m, 5m
    #[arg(value_parser = parse_mesh_order)]
    order: u8,

    /// Only write meshes overlapping the box between two "lon,lat" corners
    #[arg(short, long, num_args = 2, value_names = ["LONLAT", "LONLAT"], allow_hyphen_values = true)]
    extent: Option<Vec<String>>,

    /// Directory to write the output file to
    #[arg(short = 'd', long = "target_dir", visible_alias = "target-dir", default_value = ".")]
    target_dir: PathBuf,

    /// Output file format
    #[arg(short, long, value_enum, default_value = "geojsonl")]
    format: FormatArg,

    /// Geometry encoding of the CSV geometry column
    #[arg(long, value_enum, default_value = "wkt")]
    geometry: GeometryArg,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn build_config(args: &Args) -> Result<ExportConfig, MeshError> {
    let format = match (&args.format, &args.geometry) {
        (FormatArg::Geojsonl, _) => OutputFormat::GeoJsonLines,
        (FormatArg::Csv, GeometryArg::Wkt) => OutputFormat::Csv(GeometryFormat::Wkt),
        (FormatArg::Csv, GeometryArg::Geojson) => OutputFormat::Csv(GeometryFormat::GeoJson),
    };

    let mut config = ExportConfig::new(args.order)
        .target_dir(&args.target_dir)
        .format(format);

    if let Some(corners) = &args.extent {
        let extent = match corners.as_slice() {
            [a, b] => parse_extent(a, b)?,
            _ => {
                return Err(MeshError::InvalidExtent(
                    "expected two lon,lat corners".to_string(),
                ));
            }
        };
        config = config.extent(extent);
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), MeshError> {
    let config = build_config(args)?;

    info!(order = config.order, "making meshes");
    let path = export_meshes(&config)?;
    info!(path = %path.display(), "done");
    Ok(())
}

// The only place a failure is reported.
fn error_message(e: &MeshError) -> String {
    format!("Error: {}", e)
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", error_message(&e));
        process::exit(1);
    }
}
