use crate::coord::Coordinate;
use crate::error::MeshError;
use crate::geom::create_mesh_polygon;
use crate::index::{
    MESH_EXTENTS, decode_mesh_code, generate_mesh_code, mesh_counts, point_to_address,
};
use geo::Centroid;
use geo_types::{Coord, Point, Polygon, Rect};
use geojson::Feature;

/// A single cell of the Japanese standard regional mesh.
///
/// Each `Mesh` carries its JIS X 0410 code, its address in the grid of its order
/// and its rectangular boundary in lon/lat degrees.
///
/// # Example
///
/// ```
/// use japan_mesh_rs::Mesh;
///
/// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
/// // Tokyo Station at third order
/// let mesh = Mesh::from_lonlat(&(139.7671, 35.6812), 3)?;
/// assert_eq!(mesh.code, "53394611");
///
/// // The boundary is ready for GeoJSON export
/// let feature = mesh.to_feature();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Mesh code, e.g. `"5339"` for a first-order mesh
    pub code: String,
    /// Mesh order (1-10), where higher values mean smaller meshes
    pub order: u8,
    /// Meshes between this one and the west edge of the envelope
    pub x: u32,
    /// Meshes between this one and the south edge of the envelope
    pub y: u32,
    /// Closed five-point boundary ring
    pub geometry: Polygon<f64>,
}

impl Mesh {
    /// Create the mesh at an address.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidAddress`] when `(x, y)` is outside
    /// [`mesh_counts`](crate::mesh_counts) for `order`.
    pub fn from_address(order: u8, x: u32, y: u32) -> Result<Self, MeshError> {
        let geometry = create_mesh_polygon(order, x, y)?;
        let code = generate_mesh_code(order, x, y)?;

        Ok(Self {
            code,
            order,
            x,
            y,
            geometry,
        })
    }

    /// Create the mesh containing a lon/lat coordinate.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidExtent`] when the point is outside the envelope
    /// (longitude 122-154, latitude 20-46, east and north edges excluded).
    pub fn from_lonlat(coord: &impl Coordinate, order: u8) -> Result<Self, MeshError> {
        let (lon, lat) = (coord.x(), coord.y());
        let inside = (MESH_EXTENTS[0]..MESH_EXTENTS[2]).contains(&lon)
            && (MESH_EXTENTS[1]..MESH_EXTENTS[3]).contains(&lat);
        if !inside {
            return Err(MeshError::InvalidExtent(format!(
                "({}, {}) is outside the mesh envelope",
                lon, lat
            )));
        }

        // edge drift can put a point just below 46 one row past the last
        let (x_count, y_count) = mesh_counts(order)?;
        let (x, y) = point_to_address(order, coord)?;
        Self::from_address(order, x.min(x_count - 1), y.min(y_count - 1))
    }

    /// Create a mesh from its code.
    ///
    /// # Example
    /// ```
    /// use japan_mesh_rs::Mesh;
    ///
    /// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
    /// let mesh = Mesh::from_code("533946", 2)?;
    /// let restored = Mesh::from_address(2, mesh.x, mesh.y)?;
    /// assert_eq!(restored.code, "533946");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str, order: u8) -> Result<Self, MeshError> {
        let (x, y) = decode_mesh_code(code, order)?;
        Self::from_address(order, x, y)
    }

    /// South-west corner of the mesh.
    pub fn lower_left(&self) -> Coord<f64> {
        self.geometry.exterior().0[0]
    }

    /// North-east corner of the mesh.
    pub fn upper_right(&self) -> Coord<f64> {
        self.geometry.exterior().0[2]
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(self.lower_left(), self.upper_right())
    }

    /// Centre point of the mesh.
    pub fn center(&self) -> Point<f64> {
        self.to_rect().centroid()
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.geometry.clone()
    }

    /// Converts this mesh to a GeoJSON feature with the code under `properties.code`.
    pub fn to_feature(&self) -> Feature {
        let mut feature = Feature::from(geojson::Geometry::from(&self.geometry));
        feature.set_property("code", self.code.clone());
        feature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_from_address() -> Result<(), MeshError> {
        let mesh = Mesh::from_address(1, 0, 0)?;
        assert_eq!(mesh.code, "3022");
        assert_eq!(mesh.geometry.exterior().coords().count(), 5);
        assert_eq!(mesh.lower_left(), Coord { x: 122.0, y: 20.0 });
        Ok(())
    }

    #[test]
    fn test_from_address_outside_grid() {
        for (x, y) in [(32, 0), (0, 39), (100, 0), (0, 80), (u32::MAX, 0)] {
            assert_eq!(
                Mesh::from_address(1, x, y),
                Err(MeshError::InvalidAddress(1, x, y))
            );
        }
        assert!(Mesh::from_address(3, 2560, 0).is_err());
        assert!(Mesh::from_address(3, 2559, 3119).is_ok());
    }

    #[test]
    fn test_from_lonlat() -> Result<(), MeshError> {
        let mesh = Mesh::from_lonlat(&(139.7671, 35.6812), 1)?;
        assert_eq!(mesh.code, "5339");

        let mesh = Mesh::from_lonlat(&point! { x: 139.7671, y: 35.6812 }, 3)?;
        assert_eq!(mesh.code, "53394611");
        Ok(())
    }

    #[test]
    fn test_from_lonlat_outside_envelope() {
        for pt in [(121.9, 35.0), (154.0, 35.0), (139.0, 19.9), (139.0, 46.0)] {
            assert!(
                matches!(Mesh::from_lonlat(&pt, 1), Err(MeshError::InvalidExtent(_))),
                "accepted {:?}",
                pt
            );
        }
    }

    #[test]
    fn test_from_lonlat_north_east_edge() -> Result<(), MeshError> {
        let corner = (MESH_EXTENTS[2] - 1e-12, MESH_EXTENTS[3] - 1e-12);
        for order in 1..=10u8 {
            let (x_count, y_count) = mesh_counts(order)?;
            let mesh = Mesh::from_lonlat(&corner, order)?;
            assert_eq!((mesh.x, mesh.y), (x_count - 1, y_count - 1), "order {}", order);
        }
        Ok(())
    }

    #[test]
    fn test_from_code() -> Result<(), MeshError> {
        let mesh = Mesh::from_code("53394611", 3)?;
        let center = mesh.center();
        let again = Mesh::from_lonlat(&center, 3)?;
        assert_eq!(again, mesh);
        Ok(())
    }

    #[test]
    fn test_center_maps_back_to_address() -> Result<(), MeshError> {
        for order in 1..=10u8 {
            let (x_count, y_count) = mesh_counts(order)?;
            for (x, y) in [(0, 0), (x_count / 3, y_count / 2), (x_count - 1, y_count - 1)] {
                let mesh = Mesh::from_address(order, x, y)?;
                assert_eq!(point_to_address(order, &mesh.center())?, (x, y), "order {}", order);
            }
        }
        Ok(())
    }

    #[test]
    fn test_to_feature() -> Result<(), MeshError> {
        let feature = Mesh::from_address(2, 8, 8)?.to_feature();
        assert_eq!(
            feature.property("code").and_then(|v| v.as_str()),
            Some("312300")
        );

        let json = serde_json::to_string(&feature).map_err(|e| MeshError::SerializationError(e.to_string()))?;
        assert!(json.contains("\"Polygon\""));
        assert!(json.contains("\"312300\""));
        Ok(())
    }
}
