//! Arithmetic operators, enabled by `Arithmetic`.
//!
//! Both operands and the result share the wrapper type; mixing wrappers
//! with different tags, or a wrapper with a bare base value, does not
//! compile.

use core::ops;

use super::NewType;
use crate::clause::Derives;
use crate::derivables as tag;

macro_rules! binary_op {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)*) => {$(
        impl<B, Tag, D> ops::$Op for NewType<B, Tag, D>
        where
            B: ops::$Op<Output = B>,
            D: Derives<tag::Arithmetic>,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self::new(ops::$Op::$op(self.value, rhs.value))
            }
        }

        impl<B, Tag, D> ops::$OpAssign for NewType<B, Tag, D>
        where
            B: ops::$OpAssign,
            D: Derives<tag::Arithmetic>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                ops::$OpAssign::$op_assign(&mut self.value, rhs.value);
            }
        }
    )*};
}

binary_op! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}
