use crate::coord::Extent;
use crate::error::MeshError;
use crate::grid::MeshGrid;
use crate::io::csv::{GeometryFormat, write_csv};
use crate::io::geojsonl::write_geojsonl;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File format written by [`export_meshes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Line-delimited GeoJSON (`.geojsonl`), one Feature per line
    #[default]
    GeoJsonLines,
    /// CSV (`.csv`) with the polygon in the given format
    Csv(GeometryFormat),
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::GeoJsonLines => "geojsonl",
            OutputFormat::Csv(_) => "csv",
        }
    }
}

/// Configuration for writing a mesh file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub order: u8,
    pub extent: Option<Extent>,
    pub target_dir: PathBuf,
    pub format: OutputFormat,
}

impl ExportConfig {
    /// Create config for exporting every mesh of `order` to the current directory.
    ///
    /// # Example
    /// ```
    /// use japan_mesh_rs::{ExportConfig, Extent, OutputFormat};
    ///
    /// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
    /// let config = ExportConfig::new(3)
    ///     .extent(Extent::new(&(139.0, 35.0), &(140.0, 36.0))?)
    ///     .target_dir("out")
    ///     .format(OutputFormat::GeoJsonLines);
    /// assert_eq!(config.output_path().to_str(), Some("out/mesh_3.geojsonl"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(order: u8) -> Self {
        Self {
            order,
            extent: None,
            target_dir: PathBuf::from("."),
            format: OutputFormat::default(),
        }
    }

    pub fn extent(mut self, extent: Extent) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn target_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.target_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// `<target_dir>/mesh_<order>.<ext>`
    pub fn output_path(&self) -> PathBuf {
        self.target_dir
            .join(format!("mesh_{}.{}", self.order, self.format.extension()))
    }
}

/// Writes every mesh selected by `config` to its output file and returns the path.
///
/// The order and target directory are checked before the file is created, so a
/// rejected request leaves nothing behind.
///
/// # Example
///
/// ```no_run
/// use japan_mesh_rs::{ExportConfig, export_meshes};
///
/// let path = export_meshes(&ExportConfig::new(1)).unwrap();
/// println!("wrote {}", path.display());
/// ```
pub fn export_meshes(config: &ExportConfig) -> Result<PathBuf, MeshError> {
    let grid = MeshGrid::new(config.order, config.extent.as_ref())?;

    if !config.target_dir.is_dir() {
        return Err(MeshError::IoError(format!(
            "target directory '{}' does not exist",
            config.target_dir.display()
        )));
    }

    let path = config.output_path();
    debug!(path = %path.display(), meshes = grid.len(), "writing meshes");

    let file = File::create(&path).map_err(|e| MeshError::IoError(e.to_string()))?;
    let writer = BufWriter::new(file);
    let written = match config.format {
        OutputFormat::GeoJsonLines => write_geojsonl(grid.iter(), writer)?,
        OutputFormat::Csv(geometry) => write_csv(grid.iter(), writer, geometry)?,
    };

    info!(path = %path.display(), meshes = written, "mesh file written");
    Ok(path)
}
