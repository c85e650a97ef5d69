use std::iter::Sum;
use std::ops::*;

use super::Vector2D;

/// Implements one arithmetic operator for every operand shape.
///
/// The assign forms do the componentwise work, the copy-returning forms copy
/// the receiver and defer to them.
macro_rules! impl_arithmetic {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $chain:ident, $assign:tt) => {
        impl $OpAssign for Vector2D {
            #[inline]
            fn $op_assign(&mut self, other: Self) {
                self.x $assign other.x;
                self.y $assign other.y;
            }
        }

        impl $OpAssign<&Vector2D> for Vector2D {
            #[inline]
            fn $op_assign(&mut self, other: &Self) {
                self.$op_assign(*other)
            }
        }

        impl $OpAssign<f64> for Vector2D {
            #[inline]
            fn $op_assign(&mut self, scalar: f64) {
                self.x $assign scalar;
                self.y $assign scalar;
            }
        }

        impl $Op for Vector2D {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: Self) -> Self::Output {
                self.$op_assign(other);
                self
            }
        }

        impl $Op<&Vector2D> for Vector2D {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: &Self) -> Self::Output {
                self.$op_assign(*other);
                self
            }
        }

        impl $Op<Vector2D> for &Vector2D {
            type Output = Vector2D;

            #[inline]
            fn $op(self, other: Vector2D) -> Self::Output {
                (*self).$op(other)
            }
        }

        impl $Op<f64> for Vector2D {
            type Output = Self;

            #[inline]
            fn $op(mut self, scalar: f64) -> Self::Output {
                self.$op_assign(scalar);
                self
            }
        }

        impl $Op<f64> for &Vector2D {
            type Output = Vector2D;

            #[inline]
            fn $op(self, scalar: f64) -> Self::Output {
                (*self).$op(scalar)
            }
        }

        impl Vector2D {
            #[doc = concat!(
                "Applies `", stringify!($assign), "` in place and returns the receiver for chaining.\n\n",
                "`rhs` is either another vector or an `f64` applied to both components."
            )]
            #[inline]
            pub fn $chain<R>(&mut self, rhs: R) -> &mut Self
            where
                Self: $OpAssign<R>,
            {
                self.$op_assign(rhs);
                self
            }
        }
    };
}

impl_arithmetic!(Add, add, AddAssign, add_assign, add_mut, +=);
impl_arithmetic!(Sub, sub, SubAssign, sub_assign, sub_mut, -=);
impl_arithmetic!(Mul, mul, MulAssign, mul_assign, mul_mut, *=);
impl_arithmetic!(Div, div, DivAssign, div_assign, div_mut, /=);
impl_arithmetic!(Rem, rem, RemAssign, rem_assign, rem_mut, %=);

// scalars on the left, for the commutative operators
impl Add<Vector2D> for f64 {
    type Output = Vector2D;

    #[inline]
    fn add(self, vector: Vector2D) -> Self::Output {
        vector + self
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    #[inline]
    fn mul(self, vector: Vector2D) -> Self::Output {
        vector * self
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Neg for &Vector2D {
    type Output = Vector2D;

    #[inline]
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for Vector2D {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Index<usize> for Vector2D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index {index} out of bounds for Vector2D"),
        }
    }
}

impl IndexMut<usize> for Vector2D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index {index} out of bounds for Vector2D"),
        }
    }
}

impl Vector2D {
    /// Non-panicking counterpart of indexing.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }
}
