use crate::coord::Coordinate;
use crate::error::MeshError;
use geo_types::{Coord, Rect};

/// A lon/lat bounding region used to restrict mesh enumeration.
///
/// The two corners may be given in any order; they are normalised so that
/// `lower_left` holds the minimum longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    lower_left: Coord<f64>,
    upper_right: Coord<f64>,
}

impl Extent {
    /// Creates an extent from two opposite corners.
    ///
    /// # Example
    /// ```
    /// use japan_mesh_rs::Extent;
    ///
    /// # fn main() -> Result<(), japan_mesh_rs::MeshError> {
    /// let extent = Extent::new(&(153.0, 20.7), &(123.0, 45.3))?;
    /// assert_eq!(extent.lower_left().x, 123.0);
    /// assert_eq!(extent.upper_right().y, 45.3);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidExtent`] if any component is not strictly between -180 and 180.
    pub fn new(a: &impl Coordinate, b: &impl Coordinate) -> Result<Self, MeshError> {
        for value in [a.x(), a.y(), b.x(), b.y()] {
            if !(-180.0 < value && value < 180.0) {
                return Err(MeshError::InvalidExtent(format!(
                    "coordinate {} must be between -180 and 180",
                    value
                )));
            }
        }

        Ok(Self {
            lower_left: Coord {
                x: a.x().min(b.x()),
                y: a.y().min(b.y()),
            },
            upper_right: Coord {
                x: a.x().max(b.x()),
                y: a.y().max(b.y()),
            },
        })
    }

    pub fn from_rect(rect: &Rect<f64>) -> Result<Self, MeshError> {
        Self::new(&rect.min(), &rect.max())
    }

    pub fn lower_left(&self) -> Coord<f64> {
        self.lower_left
    }

    pub fn upper_right(&self) -> Coord<f64> {
        self.upper_right
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(self.lower_left, self.upper_right)
    }
}
