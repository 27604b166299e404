/// A position or direction in world space.
pub type Point3 = [f32; 3];

#[inline]
pub fn add(a: Point3, b: Point3) -> Point3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Point3, b: Point3) -> Point3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: Point3, s: f32) -> Point3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn length(a: Point3) -> f32 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

/// Scale `a` to unit length. Zero vectors are returned unchanged.
pub fn normalize(a: Point3) -> Point3 {
    let len = length(a);
    if len <= f32::EPSILON {
        return a;
    }
    scale(a, 1.0 / len)
}

pub fn is_finite(a: &Point3) -> bool {
    a.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        assert_eq!(add([1.0, 2.0, 3.0], [0.5, 0.5, 0.5]), [1.5, 2.5, 3.5]);
        assert_eq!(sub([1.0, 2.0, 3.0], [1.0, 1.0, 1.0]), [0.0, 1.0, 2.0]);
        assert_eq!(scale([1.0, -2.0, 4.0], 0.5), [0.5, -1.0, 2.0]);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalize_leaves_zero_vector() {
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn finite_check_rejects_nan_and_inf() {
        assert!(is_finite(&[0.0, 1.0, -1.0]));
        assert!(!is_finite(&[f32::NAN, 0.0, 0.0]));
        assert!(!is_finite(&[0.0, f32::INFINITY, 0.0]));
    }
}
