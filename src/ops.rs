// Implementing std::ops traits for syntactic sugar
//
// Every operator forwards to the matching `Vector` method, so `a + b` and
// `a.add(b)` can never disagree.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Vec2, Vec3, Vector};

macro_rules! impl_binary_op {
    ($vec:ty, $op:ident, $fn:ident, $method:ident) => {
        impl $op for $vec {
            type Output = $vec;

            fn $fn(self, other: Self) -> Self::Output {
                Vector::$method(&self, other)
            }
        }

        impl $op<f64> for $vec {
            type Output = $vec;

            fn $fn(self, scalar: f64) -> Self::Output {
                Vector::$method(&self, scalar)
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($vec:ty, $op:ident, $fn:ident, $method:ident) => {
        impl $op for $vec {
            fn $fn(&mut self, other: Self) {
                Vector::$method(self, other);
            }
        }

        impl $op<f64> for $vec {
            fn $fn(&mut self, scalar: f64) {
                Vector::$method(self, scalar);
            }
        }
    };
}

macro_rules! impl_ops {
    ($vec:ty) => {
        impl_binary_op!($vec, Add, add, add);
        impl_binary_op!($vec, Sub, sub, sub);
        impl_binary_op!($vec, Mul, mul, mul);
        impl_binary_op!($vec, Div, div, div);

        impl_assign_op!($vec, AddAssign, add_assign, iadd);
        impl_assign_op!($vec, SubAssign, sub_assign, isub);
        impl_assign_op!($vec, MulAssign, mul_assign, imul);
        impl_assign_op!($vec, DivAssign, div_assign, idiv);

        // Scalar on the left, for `2.0 * v`
        impl Mul<$vec> for f64 {
            type Output = $vec;

            fn mul(self, v: $vec) -> Self::Output {
                Vector::mul(&v, self)
            }
        }

        impl Neg for $vec {
            type Output = $vec;

            fn neg(self) -> Self::Output {
                self.inv()
            }
        }
    };
}

impl_ops!(Vec2);
impl_ops!(Vec3);
