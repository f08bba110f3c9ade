pub mod constants;
mod identifier;
mod indexing;
mod size;

pub use constants::{CodeSuffix, FIRST_MESH_SIZE, MAX_MESH_ORDER, MESH_EXTENTS, MESH_LEVELS, MeshLevel};
pub use identifier::{decode_mesh_code, generate_mesh_code, mesh_code_length};
pub use indexing::{address_to_lower_left, end_offset, point_to_address, start_offset};
pub use size::{check_address, mesh_counts, mesh_level, mesh_size, meshes_per_first_mesh, parse_mesh_order};

pub(crate) use indexing::corner;
