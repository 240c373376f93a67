use std::fmt;

/// The operation set shared by [`Vec2`](crate::Vec2) and [`Vec3`](crate::Vec3).
///
/// Implementors supply the component-wise primitives (`map`, `map_with` and
/// their in-place twins) plus a handful of arity-specific reductions; every
/// other operation is built on top of those and comes for free.
///
/// Binary operations accept anything convertible into [`Vector::Like`]: a
/// bare `f64` is broadcast to every component, and component arrays, named
/// records and vector instances are applied component-wise.
///
/// Nothing here guards against IEEE-754 special values. Dividing by zero or
/// normalizing a zero-length vector yields infinite or NaN components.
pub trait Vector: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// The input shapes accepted in place of a full vector argument.
    type Like: From<f64> + From<Self> + Into<Self>;
    /// Components as a fixed-size array, in axis order.
    type Array;
    /// Components as a record with named fields.
    type Object;

    /// Returns a new vector with `f` applied to each component.
    fn map(&self, f: impl FnMut(f64) -> f64) -> Self;

    /// Applies `f` to each component in place.
    fn imap(&mut self, f: impl FnMut(f64) -> f64) -> &mut Self;

    /// Returns a new vector whose component `i` is `f(self[i], other[i])`.
    fn map_with(&self, other: impl Into<Self::Like>, f: impl FnMut(f64, f64) -> f64) -> Self;

    /// In-place [`map_with`](Vector::map_with). `other` is never modified.
    fn imap_with(
        &mut self,
        other: impl Into<Self::Like>,
        f: impl FnMut(f64, f64) -> f64,
    ) -> &mut Self;

    /// Sum of the squared components.
    fn len_sq(&self) -> f64;

    /// Sum of the components.
    fn sum(&self) -> f64;

    fn to_array(&self) -> Self::Array;

    fn to_object(&self) -> Self::Object;

    fn add(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, |a, b| a + b)
    }

    fn iadd(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, |a, b| a + b)
    }

    fn sub(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, |a, b| a - b)
    }

    fn isub(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, |a, b| a - b)
    }

    fn mul(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, |a, b| a * b)
    }

    fn imul(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, |a, b| a * b)
    }

    fn div(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, |a, b| a / b)
    }

    fn idiv(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, |a, b| a / b)
    }

    /// Component-wise mean of `self` and `other`.
    fn avg(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, |a, b| (a + b) / 2.0)
    }

    fn iavg(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, |a, b| (a + b) / 2.0)
    }

    /// Component-wise maximum. A NaN on either side yields NaN.
    fn max(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, nan_max)
    }

    fn imax(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, nan_max)
    }

    /// Component-wise minimum. A NaN on either side yields NaN.
    fn min(&self, other: impl Into<Self::Like>) -> Self {
        self.map_with(other, nan_min)
    }

    fn imin(&mut self, other: impl Into<Self::Like>) -> &mut Self {
        self.imap_with(other, nan_min)
    }

    /// Component-wise sign: `1` for positive, `-1` for negative, while zero
    /// (of either sign) and NaN pass through unchanged.
    ///
    /// Unlike [`f64::signum`], `sign(0.0)` is `0.0`.
    fn sign(&self) -> Self {
        self.map(sign)
    }

    fn isign(&mut self) -> &mut Self {
        self.imap(sign)
    }

    /// Euclidean length.
    fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    /// Alias of [`normalize`](Vector::normalize).
    fn norm(&self) -> Self {
        self.normalize()
    }

    /// Returns `self / self.len()`.
    fn normalize(&self) -> Self {
        let len = self.len();
        if len == 0.0 {
            log::trace!("normalizing zero-length {}", self);
        }
        self.div(len)
    }

    /// Alias of [`inormalize`](Vector::inormalize).
    fn inorm(&mut self) -> &mut Self {
        self.inormalize()
    }

    fn inormalize(&mut self) -> &mut Self {
        let len = self.len();
        if len == 0.0 {
            log::trace!("normalizing zero-length {} in place", self);
        }
        self.idiv(len)
    }

    /// Linear interpolation `self + (other - self) * alpha`.
    ///
    /// `alpha` is not clamped, so values outside `[0, 1]` extrapolate.
    fn mix(&self, other: impl Into<Self::Like>, alpha: f64) -> Self {
        self.map_with(other, |a, b| a + (b - a) * alpha)
    }

    fn imix(&mut self, other: impl Into<Self::Like>, alpha: f64) -> &mut Self {
        self.imap_with(other, |a, b| a + (b - a) * alpha)
    }

    /// Negates every component.
    fn inv(&self) -> Self {
        self.map(|v| -v)
    }

    fn iinv(&mut self) -> &mut Self {
        self.imap(|v| -v)
    }

    /// Sets every component to zero in place.
    fn izero(&mut self) -> &mut Self {
        self.imap(|_| 0.0)
    }

    fn dist(&self, other: impl Into<Self::Like>) -> f64 {
        self.dist_sq(other).sqrt()
    }

    fn dist_sq(&self, other: impl Into<Self::Like>) -> f64 {
        self.map_with(other, |a, b| (a - b) * (a - b)).sum()
    }

    /// Exact component-wise equality against any accepted input shape.
    ///
    /// A scalar compares against every component. No tolerance is applied,
    /// so NaN components never compare equal.
    fn equals(&self, other: impl Into<Self::Like>) -> bool {
        let like: Self::Like = other.into();
        let other: Self = like.into();
        *self == other
    }
}

// Math.max style: NaN wins over any number
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_keeps_zero_and_nan() {
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert!(sign(-0.0).is_sign_negative());
        assert!(sign(f64::NAN).is_nan());
        assert_eq!(sign(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn max_min_propagate_nan() {
        assert_eq!(nan_max(1.0, 2.0), 2.0);
        assert_eq!(nan_min(1.0, 2.0), 1.0);
        assert!(nan_max(f64::NAN, 2.0).is_nan());
        assert!(nan_min(1.0, f64::NAN).is_nan());
    }
}
