#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Slack, in radians, applied to circle/polygon distance comparisons.
///
/// Relationship answers move towards `Intersects` by this much so that
/// `Disjoint` and `Contains` stay true despite rounding in `atan2`/`asin`.
pub const ANGLE_EPSILON: f64 = 1.0e-12;

/// Squared-norm tolerance for accepting components as already normalized.
pub const UNIT_NORM_TOLERANCE: f64 = 1.0e-12;
