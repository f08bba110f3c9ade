use crate::error::MeshError;
use crate::index::constants::{CodeSuffix, MESH_EXTENTS};
use crate::index::size::{check_address, mesh_counts, mesh_level};

/// Generates the JIS X 0410 mesh code for the mesh at `(x, y)`.
///
/// # Format
///
/// A first-order code is four digits: the latitude of the mesh's south edge
/// multiplied by 1.5, followed by the last two digits of its west edge longitude.
/// Every finer order takes the code of the parent mesh containing it and appends
/// its position within that parent:
///
/// | Suffix      | Orders            | Digits                                   |
/// |-------------|-------------------|------------------------------------------|
/// | Row/column  | 2, 3, 7, 8, 9, 10 | `y mod ratio` then `x mod ratio`         |
/// | Quadrant    | 4, 5, 6           | `(y mod 2) * 2 + (x mod 2) + 1` (1-4)    |
///
/// # Example
/// ```
/// use japan_mesh_rs::generate_mesh_code;
///
/// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
/// assert_eq!(generate_mesh_code(1, 0, 0)?, "3022");
/// assert_eq!(generate_mesh_code(2, 8, 8)?, "312300");
/// assert_eq!(generate_mesh_code(4, 2, 2)?, "302200111");
/// # Ok(())
/// # }
/// ```
pub fn generate_mesh_code(order: u8, x: u32, y: u32) -> Result<String, MeshError> {
    check_address(order, x, y)?;
    let mut code = String::with_capacity(14);
    push_code(order, x, y, &mut code)?;
    Ok(code)
}

fn push_code(order: u8, x: u32, y: u32, code: &mut String) -> Result<(), MeshError> {
    let level = mesh_level(order)?;
    let Some(parent) = level.parent else {
        // 1.5 * latitude and the longitude minus 100 are both whole numbers here
        let lat_code = (MESH_EXTENTS[1] * 1.5) as u32 + y;
        let lon_code = (MESH_EXTENTS[0] as u32 + x) % 100;
        code.push_str(&format!("{}{:02}", lat_code, lon_code));
        return Ok(());
    };

    let ratio = level.ratio;
    push_code(parent, x / ratio, y / ratio, code)?;
    match level.suffix {
        CodeSuffix::RowColumn => code.push_str(&format!("{}{}", y % ratio, x % ratio)),
        CodeSuffix::Quadrant => code.push_str(&((y % ratio) * 2 + x % ratio + 1).to_string()),
    }
    Ok(())
}

/// Number of digits in a mesh code of `order`.
pub fn mesh_code_length(order: u8) -> Result<usize, MeshError> {
    let level = mesh_level(order)?;
    match level.parent {
        None => Ok(4),
        Some(parent) => {
            let suffix = match level.suffix {
                CodeSuffix::RowColumn => 2,
                CodeSuffix::Quadrant => 1,
            };
            Ok(mesh_code_length(parent)? + suffix)
        }
    }
}

/// Decodes a mesh code back to its `(x, y)` address at `order`.
///
/// The order has to be given because codes of different orders can share a
/// length (orders 5 and 7 are both ten digits, 8 and 9 both twelve).
///
/// # Errors
///
/// - [`MeshError::InvalidOrder`] - Order outside 1-10
/// - [`MeshError::InvalidMeshCode`] - Wrong length, a non-digit, a digit out of
///   range for its level, or a first-order mesh outside the envelope
pub fn decode_mesh_code(code: &str, order: u8) -> Result<(u32, u32), MeshError> {
    let expected = mesh_code_length(order)?;
    if code.len() != expected {
        return Err(MeshError::InvalidMeshCode(format!(
            "'{}' has {} digits, order {} codes have {}",
            code,
            code.len(),
            order,
            expected
        )));
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MeshError::InvalidMeshCode(format!(
            "'{}' contains a non-digit character",
            code
        )));
    }
    decode_digits(code.as_bytes(), order)
}

fn decode_digits(digits: &[u8], order: u8) -> Result<(u32, u32), MeshError> {
    let level = mesh_level(order)?;
    let Some(parent) = level.parent else {
        return decode_first_order(digits);
    };

    let parent_len = mesh_code_length(parent)?;
    let (parent_x, parent_y) = decode_digits(&digits[..parent_len], parent)?;
    let suffix = &digits[parent_len..];
    let ratio = level.ratio;

    let (dx, dy) = match level.suffix {
        CodeSuffix::RowColumn => (digit(suffix[1]), digit(suffix[0])),
        CodeSuffix::Quadrant => {
            let quadrant = digit(suffix[0]);
            if !(1..=4).contains(&quadrant) {
                return Err(MeshError::InvalidMeshCode(format!(
                    "quadrant digit {} at order {} must be 1-4",
                    quadrant, order
                )));
            }
            ((quadrant - 1) % 2, (quadrant - 1) / 2)
        }
    };
    if dx >= ratio || dy >= ratio {
        return Err(MeshError::InvalidMeshCode(format!(
            "digits {}{} at order {} must be below {}",
            dy, dx, order, ratio
        )));
    }

    Ok((parent_x * ratio + dx, parent_y * ratio + dy))
}

fn decode_first_order(digits: &[u8]) -> Result<(u32, u32), MeshError> {
    let lat_code = digit(digits[0]) * 10 + digit(digits[1]);
    let lon_code = digit(digits[2]) * 10 + digit(digits[3]);

    let y = lat_code as i64 - (MESH_EXTENTS[1] * 1.5) as i64;
    let x = lon_code as i64 + 100 - MESH_EXTENTS[0] as i64;
    let (x_count, y_count) = mesh_counts(1)?;

    if y < 0 || y >= y_count as i64 || x < 0 || x >= x_count as i64 {
        return Err(MeshError::InvalidMeshCode(format!(
            "first-order mesh {:02}{:02} is outside the mesh envelope",
            lat_code, lon_code
        )));
    }
    Ok((x as u32, y as u32))
}

fn digit(b: u8) -> u32 {
    (b - b'0') as u32
}
