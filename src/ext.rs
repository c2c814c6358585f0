//! Operator traits for DecimalNumber.

use crate::num::DecimalNumber;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<DecimalNumber> for DecimalNumber {
            type Output = DecimalNumber;

            fn $method(self, rhs: DecimalNumber) -> DecimalNumber {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&DecimalNumber> for DecimalNumber {
            type Output = DecimalNumber;

            fn $method(self, rhs: &DecimalNumber) -> DecimalNumber {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<DecimalNumber> for &DecimalNumber {
            type Output = DecimalNumber;

            fn $method(self, rhs: DecimalNumber) -> DecimalNumber {
                $imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_assignop {
    (impl $imp:ident, $method:ident, $binop:ident, $binmethod:ident) => {
        impl $imp<DecimalNumber> for DecimalNumber {
            fn $method(&mut self, rhs: DecimalNumber) {
                *self = $binop::$binmethod(&*self, &rhs);
            }
        }

        impl $imp<&DecimalNumber> for DecimalNumber {
            fn $method(&mut self, rhs: &DecimalNumber) {
                *self = $binop::$binmethod(&*self, rhs);
            }
        }
    };
}

macro_rules! forward_int_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<i64> for DecimalNumber {
            type Output = DecimalNumber;

            fn $method(self, rhs: i64) -> DecimalNumber {
                $imp::$method(&self, &DecimalNumber::from_i64(rhs))
            }
        }

        impl $imp<i64> for &DecimalNumber {
            type Output = DecimalNumber;

            fn $method(self, rhs: i64) -> DecimalNumber {
                $imp::$method(self, &DecimalNumber::from_i64(rhs))
            }
        }
    };
}

impl Add<&DecimalNumber> for &DecimalNumber {
    type Output = DecimalNumber;

    fn add(self, rhs: &DecimalNumber) -> DecimalNumber {
        DecimalNumber::add(self, rhs)
    }
}

impl Sub<&DecimalNumber> for &DecimalNumber {
    type Output = DecimalNumber;

    fn sub(self, rhs: &DecimalNumber) -> DecimalNumber {
        DecimalNumber::sub(self, rhs)
    }
}

impl Mul<&DecimalNumber> for &DecimalNumber {
    type Output = DecimalNumber;

    fn mul(self, rhs: &DecimalNumber) -> DecimalNumber {
        DecimalNumber::mul(self, rhs)
    }
}

impl Div<&DecimalNumber> for &DecimalNumber {
    type Output = DecimalNumber;

    /// ## Panics
    ///
    /// Panics if `rhs` is zero; the named method [`DecimalNumber::div`]
    /// reports the error instead.
    fn div(self, rhs: &DecimalNumber) -> DecimalNumber {
        DecimalNumber::div(self, rhs).expect("division by zero")
    }
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_binop!(impl Mul, mul);
forward_binop!(impl Div, div);

forward_assignop!(impl AddAssign, add_assign, Add, add);
forward_assignop!(impl SubAssign, sub_assign, Sub, sub);
forward_assignop!(impl MulAssign, mul_assign, Mul, mul);
forward_assignop!(impl DivAssign, div_assign, Div, div);

forward_int_binop!(impl Add, add);
forward_int_binop!(impl Sub, sub);
forward_int_binop!(impl Mul, mul);
forward_int_binop!(impl Div, div);

impl Neg for DecimalNumber {
    type Output = DecimalNumber;

    fn neg(self) -> DecimalNumber {
        DecimalNumber::neg(&self)
    }
}

impl Neg for &DecimalNumber {
    type Output = DecimalNumber;

    fn neg(self) -> DecimalNumber {
        DecimalNumber::neg(self)
    }
}

impl PartialEq for DecimalNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_val(other) == Ordering::Equal
    }
}

impl Eq for DecimalNumber {}

impl PartialOrd for DecimalNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_val(other)
    }
}

impl PartialEq<i64> for DecimalNumber {
    fn eq(&self, other: &i64) -> bool {
        self.cmp_val(&DecimalNumber::from_i64(*other)) == Ordering::Equal
    }
}

impl PartialOrd<i64> for DecimalNumber {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp_val(&DecimalNumber::from_i64(*other)))
    }
}
