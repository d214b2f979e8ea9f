///
/// Floating-point bounds of a drawable in scene coordinates
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    ///
    /// Creates the bounds of a rectangle at `(x, y)` with the specified size
    ///
    #[inline]
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Bounds {
        Bounds { min_x: x, min_y: y, max_x: x + width, max_y: y + height }
    }

    #[inline] pub fn x(&self) -> f32         { self.min_x }
    #[inline] pub fn y(&self) -> f32         { self.min_y }
    #[inline] pub fn width(&self) -> f32     { self.max_x - self.min_x }
    #[inline] pub fn height(&self) -> f32    { self.max_y - self.min_y }

    ///
    /// The smallest bounds containing both of these bounds
    ///
    #[inline]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    ///
    /// Merges the bounds of a group of drawables (eg, the children of a scene)
    ///
    /// Returns `None` if there are no bounds to merge.
    ///
    pub fn merge_all<TIter>(bounds: TIter) -> Option<Bounds>
    where
        TIter: IntoIterator<Item=Bounds>,
    {
        bounds.into_iter().fold(None, |merged, next| match merged {
            None            => Some(next),
            Some(merged)    => Some(merged.union(&next)),
        })
    }
}
