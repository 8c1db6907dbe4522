//! 3D Cartesian vectors, the element type of every batch.
//!
//! Angles and rotations in this crate are built from two products:
//!
//! - **Dot product**: for unit vectors, `a.dot(&b)` equals `cos(θ)`.
//! - **Cross product**: perpendicular to both inputs, with magnitude `|a||b|sin(θ)`.
//!   Its direction is the rotation axis that carries `a` toward `b`.
//!
//! ```
//! use rotvec_core::Vector3;
//!
//! let a = Vector3::x_axis();
//! let b = Vector3::y_axis();
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! ```
//!
//! # Degenerate Vectors
//!
//! A vector whose norm is at or below a small threshold has no direction.
//! [`try_normalize`](Vector3::try_normalize) returns `None` for such vectors
//! instead of dividing by a near-zero norm:
//!
//! ```
//! use rotvec_core::Vector3;
//!
//! assert!(Vector3::zeros().try_normalize(1e-12).is_none());
//!
//! let unit = Vector3::new(3.0, 4.0, 0.0).try_normalize(1e-12).unwrap();
//! assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
//! ```
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public for direct access.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    ///
    /// Falls back to `hypot` when the sum of squares overflows or underflows,
    /// so components near `1e200` or `1e-200` still give the true length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let sum = self.x * self.x + self.y * self.y + self.z * self.z;
        if sum.is_finite() && sum >= f64::MIN_POSITIVE {
            return libm::sqrt(sum);
        }
        libm::hypot(libm::hypot(self.x, self.y), self.z)
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns `true` if the vector has no usable direction.
    ///
    /// A vector is degenerate when its norm is at or below `epsilon`, or when any
    /// component is NaN or infinite. A zero or non-finite norm is degenerate
    /// whatever `epsilon` is, so a negative or NaN threshold cannot let one through.
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        if !self.is_finite() {
            return true;
        }
        let mag = self.magnitude();
        mag == 0.0 || !mag.is_finite() || mag <= epsilon
    }

    /// Returns a unit vector pointing in the same direction, or `None` if the
    /// vector is degenerate (see [`is_degenerate`](Self::is_degenerate)).
    ///
    /// The degeneracy check happens before the division, so the result never
    /// contains NaN or infinity.
    pub fn try_normalize(&self, epsilon: f64) -> Option<Self> {
        if self.is_degenerate(epsilon) {
            return None;
        }
        let mag = self.magnitude();
        Some(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Computes the dot product with another vector.
    ///
    /// ```
    /// use rotvec_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product `self × other` (right-hand rule).
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the largest absolute component-wise difference to `other`.
    pub fn max_difference(&self, other: &Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
