//! # japan-mesh-rs
//!
//! Generates the Japanese Standard Regional Mesh (JIS X 0410) over the
//! envelope 122°E-154°E, 20°N-46°N, for mesh orders 1 to 10.
//!
//! There are currently three main entry points.
//!
//! ### 1. `Mesh` - Single Mesh Operations
//!
//! ```
//! use japan_mesh_rs::Mesh;
//!
//! # fn main() -> Result<(), japan_mesh_rs::MeshError> {
//! let mesh = Mesh::from_lonlat(&(139.7671, 35.6812), 3)?;
//! println!("{}", mesh.code);
//! let polygon = mesh.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `MeshGrid` - Enumerating Meshes
//!
//! ```
//! use japan_mesh_rs::{Extent, MeshGrid};
//!
//! # fn main() -> Result<(), japan_mesh_rs::MeshError> {
//! let grid = MeshGrid::builder()
//!     .order(2)
//!     .extent(Extent::new(&(139.0, 35.0), &(140.0, 36.0))?)
//!     .build()?;
//!
//! for mesh in grid.iter() {
//!     println!("{}", mesh.code);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `export_meshes` - Writing Mesh Files
//!
//! ```no_run
//! use japan_mesh_rs::{ExportConfig, OutputFormat, GeometryFormat, export_meshes};
//!
//! let config = ExportConfig::new(3)
//!     .target_dir("out")
//!     .format(OutputFormat::Csv(GeometryFormat::Wkt));
//!
//! export_meshes(&config).unwrap();
//! ```
//!

pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
pub mod io;
pub mod mesh;

pub use coord::{Coordinate, Extent};
pub use error::MeshError;
pub use geom::{create_mesh_polygon, parse_extent, parse_lonlat};
pub use grid::{MeshGrid, MeshGridBuilder, MeshIter, enumerate_meshes};
pub use index::{
    CodeSuffix, FIRST_MESH_SIZE, MAX_MESH_ORDER, MESH_EXTENTS, MESH_LEVELS, MeshLevel,
    address_to_lower_left, check_address, decode_mesh_code, end_offset, generate_mesh_code,
    mesh_code_length, mesh_counts, mesh_level, mesh_size, meshes_per_first_mesh,
    parse_mesh_order, point_to_address, start_offset,
};
pub use io::{
    ExportConfig, GeometryFormat, MeshesToGeoJsonl, OutputFormat, export_meshes, write_csv,
    write_geojsonl,
};
pub use mesh::Mesh;

pub use geo_types;
pub use geojson;

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Centroid, Contains};
    use geo_types::{Rect, coord, point};

    #[test]
    fn test_end_to_end_workflow() -> Result<(), MeshError> {
        let extent = parse_extent("139.70,35.65", "139.72,35.67")?;
        let grid = MeshGrid::builder().order(3).extent(extent).build()?;

        assert!(!grid.is_empty());
        assert_eq!(grid.order(), 3);

        let pt = point! { x: 139.7100, y: 35.6600 };
        let mesh = grid.get_mesh_at(&pt);
        assert!(mesh.is_some());

        if let Some(mesh) = mesh {
            let (x, y) = decode_mesh_code(&mesh.code, 3)?;
            assert_eq!((x, y), (mesh.x, mesh.y));
            assert!(mesh.to_rect().contains(&pt));

            let polygon = mesh.to_polygon();
            assert_eq!(polygon.exterior().coords().count(), 5);
        }
        Ok(())
    }

    #[test]
    fn test_golden_codes() -> Result<(), MeshError> {
        assert_eq!(generate_mesh_code(1, 0, 0)?, "3022");
        assert_eq!(generate_mesh_code(1, 1, 0)?, "3023");
        assert_eq!(generate_mesh_code(2, 8, 8)?, "312300");
        assert_eq!(generate_mesh_code(3, 80, 80)?, "31230000");
        assert_eq!(generate_mesh_code(4, 2, 2)?, "302200111");
        assert_eq!(generate_mesh_code(7, 10, 10)?, "3022001100");
        Ok(())
    }

    #[test]
    fn test_enumeration_counts() -> Result<(), MeshError> {
        assert_eq!(enumerate_meshes(1, None)?.count(), 1248);

        let extent = Extent::new(&(123.0, 20.7), &(153.0, 45.3))?;
        assert_eq!(enumerate_meshes(1, Some(&extent))?.count(), 1110);
        Ok(())
    }

    #[test]
    fn test_meshes_stay_in_envelope() -> Result<(), MeshError> {
        let envelope = Rect::new(
            coord! { x: MESH_EXTENTS[0], y: MESH_EXTENTS[1] },
            coord! { x: MESH_EXTENTS[2], y: MESH_EXTENTS[3] },
        );
        for mesh in enumerate_meshes(1, None)? {
            assert!(envelope.contains(&mesh.center()));
            for c in mesh.geometry.exterior().coords() {
                assert!(c.x >= MESH_EXTENTS[0] && c.x <= MESH_EXTENTS[2]);
                assert!(c.y >= MESH_EXTENTS[1] && c.y <= MESH_EXTENTS[3] + 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn test_children_nest_in_parent() -> Result<(), MeshError> {
        let parent = Mesh::from_lonlat(&(139.7671, 35.6812), 3)?;
        let grid = MeshGrid::from_rect(4, &parent.to_rect())?;

        let inside: Vec<Mesh> = grid
            .iter()
            .filter(|m| m.code.starts_with(&parent.code))
            .collect();
        assert_eq!(inside.len(), 4);
        for child in &inside {
            let center = child.geometry.centroid();
            assert!(center.is_some_and(|c| parent.to_rect().contains(&c)));
        }
        Ok(())
    }

    #[test]
    fn test_mesh_consistency_with_grid() -> Result<(), MeshError> {
        let mesh_direct = Mesh::from_lonlat(&(139.7671, 35.6812), 2)?;

        let grid = MeshGrid::from_rect(
            2,
            &Rect::new(coord! { x: 139.5, y: 35.5 }, coord! { x: 140.0, y: 36.0 }),
        )?;
        let mesh_from_grid = grid.get_mesh_at(&(139.7671, 35.6812));

        assert_eq!(mesh_from_grid, Some(mesh_direct));
        Ok(())
    }
}
