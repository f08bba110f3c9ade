use crate::error::MeshError;
use crate::grid::MeshGrid;
use crate::mesh::Mesh;
use std::borrow::Borrow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes meshes as line-delimited GeoJSON, one Feature per line.
///
/// Each line is a `Feature` whose geometry is the mesh polygon and whose
/// `properties.code` is the mesh code. Returns the number of features written.
///
/// # Example
/// ```
/// use japan_mesh_rs::{MeshGrid, write_geojsonl};
///
/// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
/// let mut out = Vec::new();
/// let written = write_geojsonl(MeshGrid::full(1)?.iter().take(2), &mut out)?;
/// assert_eq!(written, 2);
/// assert_eq!(String::from_utf8_lossy(&out).lines().count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn write_geojsonl<I, W>(meshes: I, mut writer: W) -> Result<usize, MeshError>
where
    I: IntoIterator,
    I::Item: Borrow<Mesh>,
    W: Write,
{
    let mut written = 0;
    for mesh in meshes {
        let feature = mesh.borrow().to_feature();
        serde_json::to_writer(&mut writer, &feature)
            .map_err(|e| MeshError::SerializationError(e.to_string()))?;
        writer
            .write_all(b"\n")
            .map_err(|e| MeshError::IoError(e.to_string()))?;
        written += 1;
    }
    writer
        .flush()
        .map_err(|e| MeshError::IoError(e.to_string()))?;
    Ok(written)
}

pub trait MeshesToGeoJsonl {
    fn to_geojsonl(&self, path: impl AsRef<Path>) -> Result<usize, MeshError>;
}

impl MeshesToGeoJsonl for [Mesh] {
    fn to_geojsonl(&self, path: impl AsRef<Path>) -> Result<usize, MeshError> {
        let file = File::create(path).map_err(|e| MeshError::IoError(e.to_string()))?;
        write_geojsonl(self, BufWriter::new(file))
    }
}

impl MeshesToGeoJsonl for Vec<Mesh> {
    fn to_geojsonl(&self, path: impl AsRef<Path>) -> Result<usize, MeshError> {
        self.as_slice().to_geojsonl(path)
    }
}

impl MeshesToGeoJsonl for MeshGrid {
    fn to_geojsonl(&self, path: impl AsRef<Path>) -> Result<usize, MeshError> {
        let file = File::create(path).map_err(|e| MeshError::IoError(e.to_string()))?;
        write_geojsonl(self.iter(), BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Feature, GeoJson};
    use tempfile::tempdir;

    #[test]
    fn test_line_format() -> Result<(), MeshError> {
        let mut out = Vec::new();
        write_geojsonl([Mesh::from_address(1, 0, 0)?], &mut out)?;
        let text = String::from_utf8(out).map_err(|e| MeshError::IoError(e.to_string()))?;
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(text.trim_end())
            .map_err(|e| MeshError::SerializationError(e.to_string()))?;
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Polygon");
        assert_eq!(value["properties"]["code"], "3022");

        let ring = &value["geometry"]["coordinates"][0];
        assert_eq!(ring.as_array().map(Vec::len), Some(5));
        assert_eq!(ring[0], serde_json::json!([122.0, 20.0]));
        assert_eq!(ring[0], ring[4]);
        Ok(())
    }

    #[test]
    fn test_lines_parse_as_features() -> Result<(), MeshError> {
        let mut out = Vec::new();
        let grid = MeshGrid::full(1)?;
        let written = write_geojsonl(grid.iter().take(5), &mut out)?;
        assert_eq!(written, 5);

        let text = String::from_utf8(out).map_err(|e| MeshError::IoError(e.to_string()))?;
        let codes: Vec<String> = text
            .lines()
            .map(|line| {
                let geojson: GeoJson = line.parse().map_err(|e: geojson::Error| {
                    MeshError::SerializationError(e.to_string())
                })?;
                let feature = Feature::try_from(geojson)
                    .map_err(|e| MeshError::SerializationError(e.to_string()))?;
                Ok(feature
                    .property("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string())
            })
            .collect::<Result<_, MeshError>>()?;
        assert_eq!(codes, vec!["3022", "3023", "3024", "3025", "3026"]);
        Ok(())
    }

    #[test]
    fn test_meshes_to_geojsonl_file() -> Result<(), MeshError> {
        let dir = tempdir().map_err(|e| MeshError::IoError(e.to_string()))?;
        let path = dir.path().join("meshes.geojsonl");

        let meshes = vec![Mesh::from_address(2, 0, 0)?, Mesh::from_address(2, 1, 0)?];
        assert_eq!(meshes.to_geojsonl(&path)?, 2);

        let text = std::fs::read_to_string(&path).map_err(|e| MeshError::IoError(e.to_string()))?;
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("\"302201\""));
        Ok(())
    }
}
