use std::f64::consts::PI;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{parse_components, Error};
use super::{Vec2Like, Vector, Xy};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::from_scaler(0.0)
    }

    pub const fn one() -> Self {
        Self::from_scaler(1.0)
    }

    // Both components set to the same value
    pub const fn from_scaler(s: f64) -> Self {
        Self::new(s, s)
    }

    /// Unit vector pointing `angle` radians counter-clockwise from the
    /// positive x axis.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Same as [`from_angle`](Vec2::from_angle) with the angle in degrees.
    pub fn from_degree(degree: f64) -> Self {
        Self::from_angle(degree * PI / 180.0)
    }

    pub const fn from_array(array: [f64; 2]) -> Self {
        Self::new(array[0], array[1])
    }

    pub const fn from_object(object: Xy) -> Self {
        Self::new(object.x, object.y)
    }

    // Polymorphic constructor over every accepted input shape
    pub fn from_like(value: impl Into<Vec2Like>) -> Self {
        value.into().resolve()
    }

    /// Each component drawn independently from `[0, scale)`.
    ///
    /// The result is not a uniformly distributed direction.
    pub fn random(scale: f64) -> Self {
        Self::random_with(&mut rand::thread_rng(), scale)
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        let v = Self::new(rng.gen::<f64>() * scale, rng.gen::<f64>() * scale);
        log::trace!("sampled {} with scale {}", v, scale);
        v
    }

    // Dot product of two vectors
    pub fn dot(&self, other: impl Into<Vec2Like>) -> f64 {
        let o = Self::from_like(other);
        self.x * o.x + self.y * o.y
    }

    // 2D cross product (the z of the 3D cross product, or the determinant)
    pub fn cross(&self, other: impl Into<Vec2Like>) -> f64 {
        let o = Self::from_like(other);
        self.x * o.y - self.y * o.x
    }

    // Angle from the positive x axis in radians, in (-PI, PI]
    pub fn atan2(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    // Copies components from any accepted shape; a scalar sets both
    pub fn set_from(&mut self, other: impl Into<Vec2Like>) -> &mut Self {
        *self = Self::from_like(other);
        self
    }

    pub fn ix(&mut self, f: impl FnOnce(f64) -> f64) -> &mut Self {
        self.x = f(self.x);
        self
    }

    pub fn iy(&mut self, f: impl FnOnce(f64) -> f64) -> &mut Self {
        self.y = f(self.y);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Vector for Vec2 {
    type Like = Vec2Like;
    type Array = [f64; 2];
    type Object = Xy;

    fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    fn imap(&mut self, mut f: impl FnMut(f64) -> f64) -> &mut Self {
        self.x = f(self.x);
        self.y = f(self.y);
        self
    }

    fn map_with(&self, other: impl Into<Self::Like>, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        let o = Self::from_like(other);
        Self::new(f(self.x, o.x), f(self.y, o.y))
    }

    fn imap_with(
        &mut self,
        other: impl Into<Self::Like>,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> &mut Self {
        let o = Self::from_like(other);
        self.x = f(self.x, o.x);
        self.y = f(self.y, o.y);
        self
    }

    fn len_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn sum(&self) -> f64 {
        self.x + self.y
    }

    fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    fn to_object(&self) -> Xy {
        Xy {
            x: self.x,
            y: self.y,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl FromStr for Vec2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components("Vec2", s).map(Self::from_array)
    }
}

impl From<Vec2Like> for Vec2 {
    fn from(like: Vec2Like) -> Self {
        like.resolve()
    }
}

impl From<f64> for Vec2 {
    fn from(s: f64) -> Self {
        Self::from_scaler(s)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(array: [f64; 2]) -> Self {
        Self::from_array(array)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Xy> for Vec2 {
    fn from(object: Xy) -> Self {
        Self::from_object(object)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vec2> for Xy {
    fn from(v: Vec2) -> Self {
        v.to_object()
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = Error;

    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; 2] = slice.try_into().map_err(|_| Error::Length {
            expected: 2,
            found: slice.len(),
        })?;
        Ok(Self::from_array(array))
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds: Vec2 has 2 components but the index is {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds: Vec2 has 2 components but the index is {index}"),
        }
    }
}
