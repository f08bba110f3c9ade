use crate::coord::Coordinate;
use crate::error::MeshError;
use crate::index::constants::MESH_EXTENTS;
use crate::index::size::{check_address, mesh_size};
use geo_types::Coord;

/// Converts a lon/lat coordinate to the `(x, y)` address of the mesh containing it.
///
/// The address counts whole meshes of `order` from the south-west corner of the
/// envelope. A point exactly on a mesh edge belongs to the mesh whose lower or left
/// edge it is on. Points west or south of the envelope clamp to 0.
///
/// # Example
/// ```
/// use japan_mesh_rs::point_to_address;
///
/// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
/// assert_eq!(point_to_address(1, &(139.7, 35.68))?, (17, 23));
/// # Ok(())
/// # }
/// ```
pub fn point_to_address<C: Coordinate>(order: u8, coord: &C) -> Result<(u32, u32), MeshError> {
    start_offset(order, coord)
}

/// Number of whole meshes lying west and south of `coord`, counted from the
/// envelope's minimum corner.
pub fn start_offset<C: Coordinate>(order: u8, coord: &C) -> Result<(u32, u32), MeshError> {
    let (lon_size, lat_size) = mesh_size(order)?;
    Ok((
        count_from_min(MESH_EXTENTS[0], lon_size, coord.x()),
        count_from_min(MESH_EXTENTS[1], lat_size, coord.y()),
    ))
}

/// Number of whole meshes lying east and north of `coord`, counted from the
/// envelope's maximum corner.
pub fn end_offset<C: Coordinate>(order: u8, coord: &C) -> Result<(u32, u32), MeshError> {
    let (lon_size, lat_size) = mesh_size(order)?;
    Ok((
        count_from_max(MESH_EXTENTS[2], lon_size, coord.x()),
        count_from_max(MESH_EXTENTS[3], lat_size, coord.y()),
    ))
}

/// Lower-left corner of the mesh at `(x, y)`.
pub fn address_to_lower_left(order: u8, x: u32, y: u32) -> Result<Coord<f64>, MeshError> {
    check_address(order, x, y)?;
    let (lon_size, lat_size) = mesh_size(order)?;
    Ok(corner(lon_size, lat_size, x, y))
}

pub(crate) fn corner(lon_size: f64, lat_size: f64, x: u32, y: u32) -> Coord<f64> {
    Coord {
        x: MESH_EXTENTS[0] + lon_size * x as f64,
        y: MESH_EXTENTS[1] + lat_size * y as f64,
    }
}

// Equivalent to counting up from zero while `origin + size * (n + 1) <= value`.
// The quotient only seeds the count; the comparisons decide, so edge ties match
// the linear scan exactly. Counts saturate at `u32::MAX`.
fn count_from_min(origin: f64, size: f64, value: f64) -> u32 {
    let reached = |n: u32| origin + size * n as f64 <= value;
    let mut count = seed((value - origin) / size);
    while count > 0 && !reached(count) {
        count -= 1;
    }
    while count < u32::MAX && reached(count + 1) {
        count += 1;
    }
    count
}

// Mirror of `count_from_min`: counts while `value <= origin - size * (n + 1)`.
fn count_from_max(origin: f64, size: f64, value: f64) -> u32 {
    let reached = |n: u32| value <= origin - size * n as f64;
    let mut count = seed((origin - value) / size);
    while count > 0 && !reached(count) {
        count -= 1;
    }
    while count < u32::MAX && reached(count + 1) {
        count += 1;
    }
    count
}

// Infinite quotients saturate like huge finite ones; NaN seeds 0.
fn seed(quotient: f64) -> u32 {
    if quotient > 0.0 {
        quotient.floor().min(u32::MAX as f64) as u32
    } else {
        0
    }
}
