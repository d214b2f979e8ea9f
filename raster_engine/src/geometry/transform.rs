///
/// A 2D affine transform
///
/// A point `(x, y)` maps to `(e11*x + e12*y + e13, e21*x + e22*y + e23)`
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub e11: f32,
    pub e12: f32,
    pub e13: f32,
    pub e21: f32,
    pub e22: f32,
    pub e23: f32,
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Transform::identity()
    }
}

#[inline]
fn nearly(a: f32, b: f32) -> bool {
    (a - b).abs() <= f32::EPSILON
}

impl Transform {
    ///
    /// The identity transform
    ///
    #[inline]
    pub const fn identity() -> Transform {
        Transform { e11: 1.0, e12: 0.0, e13: 0.0, e21: 0.0, e22: 1.0, e23: 0.0 }
    }

    ///
    /// A transform that moves points by an offset
    ///
    #[inline]
    pub const fn translate(x: f32, y: f32) -> Transform {
        Transform { e11: 1.0, e12: 0.0, e13: x, e21: 0.0, e22: 1.0, e23: y }
    }

    ///
    /// A transform that scales points about the origin
    ///
    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Transform {
        Transform { e11: sx, e12: 0.0, e13: 0.0, e21: 0.0, e22: sy, e23: 0.0 }
    }

    ///
    /// A transform that rotates points about the origin (angle in radians)
    ///
    #[inline]
    pub fn rotate(radians: f32) -> Transform {
        let (sin, cos) = radians.sin_cos();
        Transform { e11: cos, e12: -sin, e13: 0.0, e21: sin, e22: cos, e23: 0.0 }
    }

    ///
    /// Returns the transform that applies `first` and then this transform
    ///
    pub fn multiply(&self, first: &Transform) -> Transform {
        Transform {
            e11: self.e11 * first.e11 + self.e12 * first.e21,
            e12: self.e11 * first.e12 + self.e12 * first.e22,
            e13: self.e11 * first.e13 + self.e12 * first.e23 + self.e13,
            e21: self.e21 * first.e11 + self.e22 * first.e21,
            e22: self.e21 * first.e12 + self.e22 * first.e22,
            e23: self.e21 * first.e13 + self.e22 * first.e23 + self.e23,
        }
    }

    ///
    /// Computes the inverse of this transform, if it has one
    ///
    pub fn invert(&self) -> Option<Transform> {
        let det = self.e11 * self.e22 - self.e12 * self.e21;
        if det.abs() < f32::EPSILON || !det.is_finite() {
            return None;
        }

        let inv_det = 1.0 / det;

        Some(Transform {
            e11:  self.e22 * inv_det,
            e12: -self.e12 * inv_det,
            e13: (self.e12 * self.e23 - self.e22 * self.e13) * inv_det,
            e21: -self.e21 * inv_det,
            e22:  self.e11 * inv_det,
            e23: (self.e21 * self.e13 - self.e11 * self.e23) * inv_det,
        })
    }

    ///
    /// Maps a point through this transform
    ///
    #[inline]
    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.e11 * x + self.e12 * y + self.e13, self.e21 * x + self.e22 * y + self.e23)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_integer_translation() && nearly(self.e13, 0.0) && nearly(self.e23, 0.0)
    }

    ///
    /// True if this transform does not rotate or skew (it only scales and translates)
    ///
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        nearly(self.e12, 0.0) && nearly(self.e21, 0.0)
    }

    ///
    /// True if this transform moves points by a whole number of pixels without otherwise changing them
    ///
    pub fn is_integer_translation(&self) -> bool {
        self.is_axis_aligned()
            && nearly(self.e11, 1.0)
            && nearly(self.e22, 1.0)
            && nearly(self.e13, self.e13.round())
            && nearly(self.e23, self.e23.round())
    }

    ///
    /// The smallest of the scale factors along the two axes
    ///
    pub fn scale_factor(&self) -> f32 {
        let sx = (self.e11 * self.e11 + self.e21 * self.e21).sqrt();
        let sy = (self.e12 * self.e12 + self.e22 * self.e22).sqrt();

        sx.min(sy)
    }
}
