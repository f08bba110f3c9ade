use crate::coord::Extent;
use crate::error::MeshError;
use geo_types::Coord;

/// Parses a `"lon,lat"` string into a coordinate.
///
/// Whitespace around either number is ignored.
pub fn parse_lonlat(s: &str) -> Result<Coord<f64>, MeshError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [lon, lat] = parts.as_slice() else {
        return Err(MeshError::InvalidExtent(format!(
            "'{}' must be a comma-separated longitude,latitude pair",
            s
        )));
    };

    let parse = |text: &str| -> Result<f64, MeshError> {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| MeshError::InvalidExtent(format!("'{}' is not a number", text)))
    };

    Ok(Coord {
        x: parse(*lon)?,
        y: parse(*lat)?,
    })
}

/// Parses two `"lon,lat"` corner strings into a validated [`Extent`].
pub fn parse_extent(a: &str, b: &str) -> Result<Extent, MeshError> {
    let a = parse_lonlat(a)?;
    let b = parse_lonlat(b)?;
    Extent::new(&a, &b)
}
