pub mod csv;
pub mod export;
pub mod geojsonl;

pub use self::csv::{GeometryFormat, write_csv};
pub use export::{ExportConfig, OutputFormat, export_meshes};
pub use geojsonl::{MeshesToGeoJsonl, write_geojsonl};
