/// A point in a surface's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from(value: (i32, i32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

/// An axis-aligned rectangle. Used both for component bounds and for the
/// resolved image-display sub-rectangle within a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are exclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(10, 20, 100, 50);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(109, 69)));
        assert!(!rect.contains(Point::new(110, 20)));
        assert!(!rect.contains(Point::new(10, 70)));
        assert!(!rect.contains(Point::new(9, 20)));
    }

    #[test]
    fn zero_sized_rects_are_empty_and_contain_nothing() {
        let rect = Rect::new(5, 5, 0, 10);
        assert!(rect.is_empty());
        assert!(!rect.contains(Point::new(5, 5)));
    }
}
