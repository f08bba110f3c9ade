use crate::coord::{Coordinate, Extent};
use crate::error::MeshError;
use crate::index::{end_offset, mesh_counts, mesh_level, point_to_address, start_offset};
use crate::mesh::Mesh;
use geo_types::Rect;
use std::ops::Range;
use tracing::debug;

/// The meshes of one order covering an extent, or the whole envelope.
///
/// A `MeshGrid` only stores the address ranges; meshes are built lazily while
/// iterating, so even order-10 grids over the full envelope are cheap to hold.
///
/// # Example
///
/// ```
/// use japan_mesh_rs::{Extent, MeshGrid};
///
/// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
/// let extent = Extent::new(&(123.0, 20.7), &(153.0, 45.3))?;
/// let grid = MeshGrid::builder().order(1).extent(extent).build()?;
/// assert_eq!(grid.len(), 1110);
///
/// for mesh in grid.iter().take(3) {
///     println!("{}", mesh.code);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshGrid {
    order: u8,
    x_range: Range<u32>,
    y_range: Range<u32>,
}

impl MeshGrid {
    pub fn builder() -> MeshGridBuilder {
        MeshGridBuilder::new()
    }

    /// Grid of every mesh of `order` in the envelope.
    pub fn full(order: u8) -> Result<Self, MeshError> {
        Self::new(order, None)
    }

    /// Grid of the meshes of `order` intersecting `extent`.
    pub fn from_extent(order: u8, extent: &Extent) -> Result<Self, MeshError> {
        Self::new(order, Some(extent))
    }

    pub fn from_rect(order: u8, rect: &Rect<f64>) -> Result<Self, MeshError> {
        Self::from_extent(order, &Extent::from_rect(rect)?)
    }

    /// Computes the address ranges for `order`, skipping whole meshes that lie
    /// outside `extent` on each side.
    pub fn new(order: u8, extent: Option<&Extent>) -> Result<Self, MeshError> {
        mesh_level(order)?;
        let (x_count, y_count) = mesh_counts(order)?;

        let (x_range, y_range) = match extent {
            None => (0..x_count, 0..y_count),
            Some(extent) => {
                let (x_start, y_start) = start_offset(order, &extent.lower_left())?;
                let (x_end, y_end) = end_offset(order, &extent.upper_right())?;
                (
                    x_start..x_count.saturating_sub(x_end).max(x_start),
                    y_start..y_count.saturating_sub(y_end).max(y_start),
                )
            }
        };

        debug!(
            order,
            x_start = x_range.start,
            x_end = x_range.end,
            y_start = y_range.start,
            y_end = y_range.end,
            "mesh grid ranges"
        );

        Ok(Self {
            order,
            x_range,
            y_range,
        })
    }

    pub fn order(&self) -> u8 {
        self.order
    }

    /// Half-open range of x addresses covered by the grid.
    pub fn x_range(&self) -> Range<u32> {
        self.x_range.clone()
    }

    /// Half-open range of y addresses covered by the grid.
    pub fn y_range(&self) -> Range<u32> {
        self.y_range.clone()
    }

    pub fn len(&self) -> usize {
        self.x_range.len() * self.y_range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the meshes row by row, south to north, west to east within a row.
    pub fn iter(&self) -> MeshIter {
        MeshIter {
            order: self.order,
            x_range: self.x_range.clone(),
            y_end: self.y_range.end,
            x: self.x_range.start,
            y: if self.x_range.is_empty() {
                self.y_range.end
            } else {
                self.y_range.start
            },
        }
    }

    /// Returns the mesh of this grid containing `coord`, if any.
    pub fn get_mesh_at(&self, coord: &impl Coordinate) -> Option<Mesh> {
        let (x, y) = point_to_address(self.order, coord).ok()?;
        if !self.x_range.contains(&x) || !self.y_range.contains(&y) {
            return None;
        }
        Mesh::from_address(self.order, x, y).ok()
    }
}

impl<'a> IntoIterator for &'a MeshGrid {
    type Item = Mesh;
    type IntoIter = MeshIter;

    fn into_iter(self) -> MeshIter {
        self.iter()
    }
}

/// Lazy iterator over the meshes of a [`MeshGrid`].
#[derive(Debug, Clone)]
pub struct MeshIter {
    order: u8,
    x_range: Range<u32>,
    y_end: u32,
    x: u32,
    y: u32,
}

impl Iterator for MeshIter {
    type Item = Mesh;

    fn next(&mut self) -> Option<Mesh> {
        if self.y >= self.y_end {
            return None;
        }

        // order was validated when the grid was built
        let mesh = Mesh::from_address(self.order, self.x, self.y).ok()?;

        self.x += 1;
        if self.x >= self.x_range.end {
            self.x = self.x_range.start;
            self.y += 1;
        }
        Some(mesh)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.y >= self.y_end {
            0
        } else {
            let full_rows = (self.y_end - self.y - 1) as usize;
            full_rows * self.x_range.len() + (self.x_range.end - self.x) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MeshIter {}

/// Enumerates the meshes of `order` intersecting `extent`, or the whole envelope
/// when `extent` is `None`.
///
/// # Example
/// ```
/// use japan_mesh_rs::enumerate_meshes;
///
/// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
/// let meshes = enumerate_meshes(1, None)?;
/// assert_eq!(meshes.len(), 1248);
/// # Ok(())
/// # }
/// ```
pub fn enumerate_meshes(order: u8, extent: Option<&Extent>) -> Result<MeshIter, MeshError> {
    Ok(MeshGrid::new(order, extent)?.iter())
}

#[derive(Debug, Default)]
pub struct MeshGridBuilder {
    order: Option<u8>,
    extent: Option<Extent>,
}

impl MeshGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: u8) -> Self {
        self.order = Some(order);
        self
    }

    pub fn extent(mut self, extent: Extent) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Result<Self, MeshError> {
        self.extent = Some(Extent::from_rect(rect)?);
        Ok(self)
    }

    /// Builds the grid. A missing order is reported as order 0.
    pub fn build(self) -> Result<MeshGrid, MeshError> {
        let order = self.order.ok_or(MeshError::InvalidOrder(0))?;
        MeshGrid::new(order, self.extent.as_ref())
    }
}
