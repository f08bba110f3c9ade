/// Mesh envelope [min_lon, min_lat, max_lon, max_lat] in degrees.
///
/// Every address is counted from the `(min_lon, min_lat)` corner.
pub const MESH_EXTENTS: [f64; 4] = [122.0, 20.0, 154.0, 46.0];

/// Size of a first-order mesh as (longitude, latitude) degrees.
pub const FIRST_MESH_SIZE: (f64, f64) = (1.0, 2.0 / 3.0);

/// Highest defined mesh order
pub const MAX_MESH_ORDER: u8 = 10;

/// How the position inside the parent mesh is appended to the parent's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSuffix {
    /// Two digits, row (`y mod ratio`) then column (`x mod ratio`).
    RowColumn,
    /// One quadrant digit 1-4 used by the divided meshes, `(y mod 2) * 2 + (x mod 2) + 1`.
    Quadrant,
}

/// One level of the mesh hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshLevel {
    /// Parent order, `None` for the first-order mesh.
    pub parent: Option<u8>,
    /// Child meshes per axis inside one parent mesh.
    pub ratio: u32,
    pub suffix: CodeSuffix,
    /// Alias accepted on the command line, if any.
    pub alias: Option<&'static str>,
}

const fn level(parent: u8, ratio: u32, suffix: CodeSuffix, alias: Option<&'static str>) -> MeshLevel {
    MeshLevel {
        parent: Some(parent),
        ratio,
        suffix,
        alias,
    }
}

/// Mesh hierarchy indexed by `order - 1`.
///
/// Orders 1-3 are the standard meshes, 4-6 the divided meshes (500m, 250m, 125m)
/// and 7-10 the finer subdivisions (100m, 50m, 10m, 5m).
pub const MESH_LEVELS: [MeshLevel; MAX_MESH_ORDER as usize] = [
    MeshLevel {
        parent: None,
        ratio: 1,
        suffix: CodeSuffix::RowColumn,
        alias: None,
    },
    level(1, 8, CodeSuffix::RowColumn, None),
    level(2, 10, CodeSuffix::RowColumn, None),
    level(3, 2, CodeSuffix::Quadrant, Some("500m")),
    level(4, 2, CodeSuffix::Quadrant, Some("250m")),
    level(5, 2, CodeSuffix::Quadrant, Some("125m")),
    level(3, 10, CodeSuffix::RowColumn, Some("100m")),
    level(7, 2, CodeSuffix::RowColumn, Some("50m")),
    level(7, 10, CodeSuffix::RowColumn, Some("10m")),
    level(9, 2, CodeSuffix::RowColumn, Some("5m")),
];
