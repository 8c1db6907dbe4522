use crate::Vector3;

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {}", ctx);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Absolute-tolerance comparison, for values near zero where ULP distance is meaningless.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tolerance: f64, ctx: &str) {
    assert!(
        (a - b).abs() <= tolerance,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        a,
        b,
        (a - b).abs(),
        tolerance
    );
}

#[track_caller]
pub fn assert_vec_close(a: &Vector3, b: &Vector3, tolerance: f64, ctx: &str) {
    let d = a.max_difference(b);
    assert!(
        d <= tolerance,
        "{}: max component difference {:e} exceeds {:e}, a={} b={}",
        ctx,
        d,
        tolerance,
        a,
        b
    );
}

/// Asserts `a` and `b` point the same way, ignoring their lengths.
#[track_caller]
pub fn assert_parallel(a: &Vector3, b: &Vector3, tolerance: f64, ctx: &str) {
    let sin = a.cross(b).magnitude() / (a.magnitude() * b.magnitude());
    assert!(
        sin <= tolerance && a.dot(b) > 0.0,
        "{}: {} and {} are not parallel (sin={:e})",
        ctx,
        a,
        b,
        sin
    );
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
