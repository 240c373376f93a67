#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Vec2, Vec3};

// Key-value record shape of a Vec2
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

// Key-value record shape of a Vec3
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Anything that can stand in for a [`Vec2`] argument.
///
/// Built implicitly through `From`, so callers pass `2.0`, `[1.0, 2.0]`,
/// `(1.0, 2.0)`, `Xy { x: 1.0, y: 2.0 }` or a `Vec2` directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vec2Like {
    Scalar(f64),
    Components([f64; 2]),
    Named(Xy),
    Vector(Vec2),
}

/// Anything that can stand in for a [`Vec3`] argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vec3Like {
    Scalar(f64),
    Components([f64; 3]),
    Named(Xyz),
    Vector(Vec3),
}

impl Vec2Like {
    // Resolve to concrete components, broadcasting scalars
    pub fn resolve(self) -> Vec2 {
        match self {
            Vec2Like::Scalar(s) => Vec2::from_scaler(s),
            Vec2Like::Components(array) => Vec2::from_array(array),
            Vec2Like::Named(object) => Vec2::from_object(object),
            Vec2Like::Vector(v) => v,
        }
    }
}

impl Vec3Like {
    // Resolve to concrete components, broadcasting scalars
    pub fn resolve(self) -> Vec3 {
        match self {
            Vec3Like::Scalar(s) => Vec3::from_scaler(s),
            Vec3Like::Components(array) => Vec3::from_array(array),
            Vec3Like::Named(object) => Vec3::from_object(object),
            Vec3Like::Vector(v) => v,
        }
    }
}

impl From<f64> for Vec2Like {
    fn from(s: f64) -> Self {
        Vec2Like::Scalar(s)
    }
}

impl From<[f64; 2]> for Vec2Like {
    fn from(array: [f64; 2]) -> Self {
        Vec2Like::Components(array)
    }
}

impl From<(f64, f64)> for Vec2Like {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2Like::Components([x, y])
    }
}

impl From<Xy> for Vec2Like {
    fn from(object: Xy) -> Self {
        Vec2Like::Named(object)
    }
}

impl From<Vec2> for Vec2Like {
    fn from(v: Vec2) -> Self {
        Vec2Like::Vector(v)
    }
}

impl From<&Vec2> for Vec2Like {
    fn from(v: &Vec2) -> Self {
        Vec2Like::Vector(*v)
    }
}

impl From<&mut Vec2> for Vec2Like {
    fn from(v: &mut Vec2) -> Self {
        Vec2Like::Vector(*v)
    }
}

impl From<f64> for Vec3Like {
    fn from(s: f64) -> Self {
        Vec3Like::Scalar(s)
    }
}

impl From<[f64; 3]> for Vec3Like {
    fn from(array: [f64; 3]) -> Self {
        Vec3Like::Components(array)
    }
}

impl From<(f64, f64, f64)> for Vec3Like {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vec3Like::Components([x, y, z])
    }
}

impl From<Xyz> for Vec3Like {
    fn from(object: Xyz) -> Self {
        Vec3Like::Named(object)
    }
}

impl From<Vec3> for Vec3Like {
    fn from(v: Vec3) -> Self {
        Vec3Like::Vector(v)
    }
}

impl From<&Vec3> for Vec3Like {
    fn from(v: &Vec3) -> Self {
        Vec3Like::Vector(*v)
    }
}

impl From<&mut Vec3> for Vec3Like {
    fn from(v: &mut Vec3) -> Self {
        Vec3Like::Vector(*v)
    }
}
