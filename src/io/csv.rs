use crate::error::MeshError;
use crate::mesh::Mesh;
use geo_types::Polygon;
use serde::Serialize;
use std::borrow::Borrow;
use std::io::Write;

/// Output format for the mesh polygon column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    #[default]
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Serialize)]
struct MeshRow<'a> {
    code: &'a str,
    order: u8,
    x: u32,
    y: u32,
    geometry: String,
}

fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

/// Writes meshes as CSV with the columns `code,order,x,y,geometry`.
///
/// Returns the number of rows written, excluding the header.
pub fn write_csv<I, W>(meshes: I, writer: W, format: GeometryFormat) -> Result<usize, MeshError>
where
    I: IntoIterator,
    I::Item: Borrow<Mesh>,
    W: Write,
{
    let mut writer = csv::Writer::from_writer(writer);
    let mut written = 0;

    for mesh in meshes {
        let mesh = mesh.borrow();
        let geometry = match format {
            GeometryFormat::Wkt => polygon_to_wkt(&mesh.geometry),
            GeometryFormat::GeoJson => polygon_to_geojson(&mesh.geometry),
        };
        writer
            .serialize(MeshRow {
                code: &mesh.code,
                order: mesh.order,
                x: mesh.x,
                y: mesh.y,
                geometry,
            })
            .map_err(|e| MeshError::CsvError(e.to_string()))?;
        written += 1;
    }

    writer
        .flush()
        .map_err(|e| MeshError::CsvError(e.to_string()))?;
    Ok(written)
}
