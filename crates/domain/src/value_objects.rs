use serde::{Deserialize, Serialize};

/// 二维坐标（工厂平面图坐标系）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 欧氏距离
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(50.0, 50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_default_is_grid_center() {
        assert_eq!(Location::default(), Location::new(50.0, 50.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Location::new(1.0, 2.0).is_finite());
        assert!(!Location::new(f64::NAN, 2.0).is_finite());
        assert!(!Location::new(1.0, f64::INFINITY).is_finite());
    }
}
