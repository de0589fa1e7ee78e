//! Spherical surface distance.

use crate::models::Coordinates;

/// Kilometers per degree of great-circle arc used by [`great_circle_km`].
pub const KM_PER_DEGREE: f64 = 111.111;

/// Great-circle distance by the spherical law of cosines, in kilometers.
///
/// The central angle is converted to degrees and scaled by
/// [`KM_PER_DEGREE`]. This is the canonical metric of the crate: catalog
/// queries and route totals are all computed with it. The function is exactly
/// symmetric in its arguments, and coincident points yield `0.0`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coordinates;
/// use u_tour::distance::great_circle_km;
///
/// let a = Coordinates::new(0.0, 0.0);
/// let b = Coordinates::new(0.0, 1.0);
/// assert!((great_circle_km(a, b) - 111.111).abs() < 1e-9);
/// ```
pub fn great_circle_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lon = (a.longitude() - b.longitude()).abs().to_radians();

    let cos_angle = lat_a.cos() * lat_b.cos() * delta_lon.cos() + lat_a.sin() * lat_b.sin();

    // rounding can push the cosine just outside [-1, 1]
    KM_PER_DEGREE * cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}
