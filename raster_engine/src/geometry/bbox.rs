///
/// An integer pixel region, from `min` (inclusive) to `max` (exclusive)
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BBox {
    #[inline]
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> BBox {
        BBox { min_x, min_y, max_x, max_y }
    }

    ///
    /// Creates a region from a position and a size
    ///
    #[inline]
    pub const fn from_size(x: i32, y: i32, width: i32, height: i32) -> BBox {
        BBox { min_x: x, min_y: y, max_x: x + width, max_y: y + height }
    }

    ///
    /// The region covering a whole surface
    ///
    #[inline]
    pub fn of_surface(width: usize, height: usize) -> BBox {
        BBox::new(0, 0, width as i32, height as i32)
    }

    #[inline] pub fn width(&self) -> i32     { (self.max_x - self.min_x).max(0) }
    #[inline] pub fn height(&self) -> i32    { (self.max_y - self.min_y).max(0) }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    ///
    /// The overlap between two regions (which may be empty)
    ///
    #[inline]
    pub fn intersect(&self, other: &BBox) -> BBox {
        BBox {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        }
    }

    ///
    /// The smallest region containing both regions
    ///
    pub fn union(&self, other: &BBox) -> BBox {
        if self.is_empty() { return *other; }
        if other.is_empty() { return *self; }

        BBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    ///
    /// Grows the region by a number of pixels in every direction
    ///
    #[inline]
    pub fn expand(&self, amount: i32) -> BBox {
        BBox::new(self.min_x - amount, self.min_y - amount, self.max_x + amount, self.max_y + amount)
    }

    ///
    /// Clips this region so it lies within a surface of the specified size
    ///
    #[inline]
    pub fn clip_to(&self, width: usize, height: usize) -> BBox {
        self.intersect(&BBox::of_surface(width, height))
    }
}
