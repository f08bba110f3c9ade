/// Error type for japan-mesh-rs operations.
#[derive(Debug, PartialEq)]
pub enum MeshError {
    /// The mesh order is outside the defined hierarchy (1-10).
    InvalidOrder(u8),
    /// The mesh order text is neither an integer nor a known alias.
    InvalidOrderName(String),
    /// The extent is malformed or has a coordinate outside (-180, 180).
    InvalidExtent(String),
    /// The mesh code cannot be decoded at the requested order.
    InvalidMeshCode(String),
    /// The `(x, y)` address is outside the grid of the given order.
    InvalidAddress(u8, u32, u32),
    /// File I/O error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// GeoJSON serialization error.
    SerializationError(String),
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::InvalidOrder(o) => write!(f, "Invalid mesh order: {} (expected 1-10)", o),
            MeshError::InvalidOrderName(name) => write!(f, "Invalid mesh order: '{}'", name),
            MeshError::InvalidExtent(msg) => write!(f, "Invalid extent: {}", msg),
            MeshError::InvalidMeshCode(msg) => write!(f, "Invalid mesh code: {}", msg),
            MeshError::InvalidAddress(o, x, y) => {
                write!(f, "Invalid mesh address: ({}, {}) is outside the order {} grid", x, y, o)
            }
            MeshError::IoError(msg) => write!(f, "IO error: {}", msg),
            MeshError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MeshError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for MeshError {}
