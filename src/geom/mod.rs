mod parse;

pub use parse::{parse_extent, parse_lonlat};

use crate::error::MeshError;
use crate::index::{check_address, corner, mesh_size};
use geo_types::{Coord, LineString, Polygon};

/// Builds the boundary of the mesh at `(x, y)` as a closed five-point ring.
///
/// Vertices run lower-left, upper-left, upper-right, lower-right and back to
/// lower-left. The far corner is computed from the `(x + 1, y + 1)` address so
/// neighbouring meshes share their edge coordinates exactly.
///
/// Fails with [`MeshError::InvalidAddress`] for an address outside the grid.
pub fn create_mesh_polygon(order: u8, x: u32, y: u32) -> Result<Polygon<f64>, MeshError> {
    check_address(order, x, y)?;
    let (lon_size, lat_size) = mesh_size(order)?;
    let lower_left = corner(lon_size, lat_size, x, y);
    let upper_right = corner(lon_size, lat_size, x + 1, y + 1);

    let coords = vec![
        lower_left,
        Coord {
            x: lower_left.x,
            y: upper_right.y,
        },
        upper_right,
        Coord {
            x: upper_right.x,
            y: lower_left.y,
        },
        lower_left,
    ];

    Ok(Polygon::new(LineString::from(coords), vec![]))
}
