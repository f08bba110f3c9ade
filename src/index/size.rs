use crate::error::MeshError;
use crate::index::constants::{FIRST_MESH_SIZE, MAX_MESH_ORDER, MESH_EXTENTS, MESH_LEVELS, MeshLevel};

/// Looks up the hierarchy entry for a mesh order.
pub fn mesh_level(order: u8) -> Result<&'static MeshLevel, MeshError> {
    if order == 0 || order > MAX_MESH_ORDER {
        return Err(MeshError::InvalidOrder(order));
    }
    Ok(&MESH_LEVELS[order as usize - 1])
}

/// Parses a mesh order given as a number (`"1"`-`"10"`) or an alias such as `"500m"`.
///
/// # Example
/// ```
/// use japan_mesh_rs::parse_mesh_order;
///
/// assert_eq!(parse_mesh_order("3").unwrap(), 3);
/// assert_eq!(parse_mesh_order("250m").unwrap(), 5);
/// assert!(parse_mesh_order("1km").is_err());
/// ```
pub fn parse_mesh_order(s: &str) -> Result<u8, MeshError> {
    let s = s.trim();
    if let Some(i) = MESH_LEVELS.iter().position(|level| level.alias == Some(s)) {
        return Ok(i as u8 + 1);
    }

    let order: u8 = s
        .parse()
        .map_err(|_| MeshError::InvalidOrderName(s.to_string()))?;
    mesh_level(order)?;
    Ok(order)
}

/// Returns the size of one mesh at `order` as `(lon_degrees, lat_degrees)`.
///
/// Sizes are derived by dividing the parent's size by the level ratio, all the
/// way up to the first-order mesh, so every order stays consistent with the
/// hierarchy.
///
/// # Example
/// ```
/// use japan_mesh_rs::mesh_size;
///
/// let (lon, lat) = mesh_size(2).unwrap();
/// assert_eq!(lon, 1.0 / 8.0);
/// assert!((lat - 1.0 / 12.0).abs() < 1e-15);
/// ```
pub fn mesh_size(order: u8) -> Result<(f64, f64), MeshError> {
    let level = mesh_level(order)?;
    match level.parent {
        None => Ok(FIRST_MESH_SIZE),
        Some(parent) => {
            let (lon, lat) = mesh_size(parent)?;
            let ratio = level.ratio as f64;
            Ok((lon / ratio, lat / ratio))
        }
    }
}

/// Number of meshes of `order` along one axis of a first-order mesh.
pub fn meshes_per_first_mesh(order: u8) -> Result<u32, MeshError> {
    let level = mesh_level(order)?;
    match level.parent {
        None => Ok(1),
        Some(parent) => Ok(meshes_per_first_mesh(parent)? * level.ratio),
    }
}

/// Number of meshes of `order` covering the whole envelope, as `(x_count, y_count)`.
///
/// Equal to `ceil(width / lon_size)` and `ceil(height / lat_size)`, but multiplied
/// out in integers from the first-order counts. Dividing by the derived float
/// sizes overshoots by one row at orders 7 and 8.
pub fn mesh_counts(order: u8) -> Result<(u32, u32), MeshError> {
    let per_first = meshes_per_first_mesh(order)?;
    let (x_first, y_first) = first_mesh_counts();
    Ok((x_first * per_first, y_first * per_first))
}

/// Fails with [`MeshError::InvalidAddress`] unless `(x, y)` lies inside
/// [`mesh_counts`] for `order`.
pub fn check_address(order: u8, x: u32, y: u32) -> Result<(), MeshError> {
    let (x_count, y_count) = mesh_counts(order)?;
    if x >= x_count || y >= y_count {
        return Err(MeshError::InvalidAddress(order, x, y));
    }
    Ok(())
}

fn first_mesh_counts() -> (u32, u32) {
    let x = ((MESH_EXTENTS[2] - MESH_EXTENTS[0]) / FIRST_MESH_SIZE.0).ceil() as u32;
    let y = ((MESH_EXTENTS[3] - MESH_EXTENTS[1]) / FIRST_MESH_SIZE.1).ceil() as u32;
    (x, y)
}
