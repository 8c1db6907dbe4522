pub const PI: f64 = core::f64::consts::PI;

pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// Norm at or below which a vector has no usable direction.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Cross-product magnitude (of unit inputs) at or below which a pair is treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-12;
