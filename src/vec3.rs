use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{parse_components, Error};
use super::{Vec3Like, Vector, Xyz};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::from_scaler(0.0)
    }

    pub const fn one() -> Self {
        Self::from_scaler(1.0)
    }

    pub const fn from_scaler(s: f64) -> Self {
        Self::new(s, s, s)
    }

    pub const fn from_array(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }

    pub const fn from_object(object: Xyz) -> Self {
        Self::new(object.x, object.y, object.z)
    }

    pub fn from_like(value: impl Into<Vec3Like>) -> Self {
        value.into().resolve()
    }

    // Three independent samples from [0, scale)
    pub fn random(scale: f64) -> Self {
        Self::random_with(&mut rand::thread_rng(), scale)
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Self {
        let v = Self::new(
            rng.gen::<f64>() * scale,
            rng.gen::<f64>() * scale,
            rng.gen::<f64>() * scale,
        );
        log::trace!("sampled {} with scale {}", v, scale);
        v
    }

    pub fn dot(&self, other: impl Into<Vec3Like>) -> f64 {
        let o = Self::from_like(other);
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    /// Right-handed cross product `self × other`.
    ///
    /// Written with `other`'s components leading each term, which expands to
    /// the conventional `(y*oz - z*oy, z*ox - x*oz, x*oy - y*ox)`.
    pub fn cross(&self, other: impl Into<Vec3Like>) -> Self {
        let o = Self::from_like(other);
        Self::new(
            o.z * self.y - o.y * self.z,
            o.x * self.z - o.z * self.x,
            o.y * self.x - o.x * self.y,
        )
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn set_from(&mut self, other: impl Into<Vec3Like>) -> &mut Self {
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

    pub fn iz(&mut self, f: impl FnOnce(f64) -> f64) -> &mut Self {
        self.z = f(self.z);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Vector for Vec3 {
    type Like = Vec3Like;
    type Array = [f64; 3];
    type Object = Xyz;

    fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    fn imap(&mut self, mut f: impl FnMut(f64) -> f64) -> &mut Self {
        self.x = f(self.x);
        self.y = f(self.y);
        self.z = f(self.z);
        self
    }

    fn map_with(&self, other: impl Into<Self::Like>, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        let o = Self::from_like(other);
        Self::new(f(self.x, o.x), f(self.y, o.y), f(self.z, o.z))
    }

    fn imap_with(
        &mut self,
        other: impl Into<Self::Like>,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> &mut Self {
        let o = Self::from_like(other);
        self.x = f(self.x, o.x);
        self.y = f(self.y, o.y);
        self.z = f(self.z, o.z);
        self
    }

    fn len_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    fn to_object(&self) -> Xyz {
        Xyz {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components("Vec3", s).map(Self::from_array)
    }
}

impl From<Vec3Like> for Vec3 {
    fn from(like: Vec3Like) -> Self {
        like.resolve()
    }
}

impl From<f64> for Vec3 {
    fn from(s: f64) -> Self {
        Self::from_scaler(s)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(array: [f64; 3]) -> Self {
        Self::from_array(array)
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Xyz> for Vec3 {
    fn from(object: Xyz) -> Self {
        Self::from_object(object)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<Vec3> for (f64, f64, f64) {
    fn from(v: Vec3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<Vec3> for Xyz {
    fn from(v: Vec3) -> Self {
        v.to_object()
    }
}

impl TryFrom<&[f64]> for Vec3 {
    type Error = Error;

    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; 3] = slice.try_into().map_err(|_| Error::Length {
            expected: 3,
            found: slice.len(),
        })?;
        Ok(Self::from_array(array))
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: Vec3 has 3 components but the index is {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds: Vec3 has 3 components but the index is {index}"),
        }
    }
}
