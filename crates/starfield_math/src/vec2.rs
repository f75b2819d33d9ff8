//! 2D Vector type

/// 2D Vector with x, y components
///
/// Screen convention: +x is right, +y is down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True if both components are finite and strictly positive
    #[inline]
    pub fn is_positive(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }
}

// Operator overloads

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_add_sub() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, 7.0);
        assert_eq!(a + b, Vec2::new(6.0, 9.0));
        assert_eq!(b - a, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_mul_scalar() {
        let v = Vec2::new(1.0, -2.0);
        assert_eq!(v * 2.0, Vec2::new(2.0, -4.0));
    }

    #[test]
    fn test_is_positive() {
        assert!(Vec2::new(1.0, 0.5).is_positive());
        assert!(!Vec2::new(0.0, 1.0).is_positive());
        assert!(!Vec2::new(1.0, -1.0).is_positive());
        assert!(!Vec2::new(f32::INFINITY, 1.0).is_positive());
        assert!(!Vec2::new(f32::NAN, 1.0).is_positive());
    }
}
