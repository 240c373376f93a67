//! Lightweight 2D and 3D `f64` vectors.
//!
//! The shared operation set lives on the [`Vector`] trait, so bring it into
//! scope (or use the [`prelude`]) to call `add`, `normalize`, `dist` and
//! friends. Methods without an `i` prefix return a new vector; the `i`
//! variants mutate the receiver and hand it back for chaining.
//!
//! ```
//! use voctor::prelude::*;
//!
//! let mut a = Vec2::new(3.0, 1.0);
//! assert_eq!(a.add(Vec2::from_scaler(3.0)), Vec2::new(6.0, 4.0));
//!
//! a.iadd([1.0, 1.0]).imul(2.0);
//! assert!(a.equals([8.0, 4.0]));
//! ```

pub mod error;
pub mod like;
pub mod ops;
pub mod vec2;
pub mod vec3;
pub mod vector;

pub use error::*;
pub use like::*;
pub use vec2::*;
pub use vec3::*;
pub use vector::*;

pub mod prelude {
    pub use crate::{Error, Vec2, Vec2Like, Vec3, Vec3Like, Vector, Xy, Xyz};
}
