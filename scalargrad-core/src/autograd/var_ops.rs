//! `std::ops` for [`Var`]: every owned/borrowed pairing plus mixes with `f64`.
//!
//! Only `&Var op &Var` carries real logic; the other forms forward to it,
//! promoting literals with [`Var::lift`] on the var's own graph.

use super::graph::Var;
use super::op::Op;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add<&Var> for &Var {
    type Output = Var;

    fn add(self, rhs: &Var) -> Var {
        self.binary(rhs, self.value() + rhs.value(), Op::Add)
    }
}

impl Mul<&Var> for &Var {
    type Output = Var;

    fn mul(self, rhs: &Var) -> Var {
        self.binary(rhs, self.value() * rhs.value(), Op::Mul)
    }
}

impl Div<&Var> for &Var {
    type Output = Var;

    fn div(self, rhs: &Var) -> Var {
        self.binary(rhs, self.value() / rhs.value(), Op::Div)
    }
}

impl Sub<&Var> for &Var {
    type Output = Var;

    // No dedicated rule: u - v records u + (-v).
    fn sub(self, rhs: &Var) -> Var {
        self + &(-rhs)
    }
}

impl Neg for &Var {
    type Output = Var;

    fn neg(self) -> Var {
        self.record(-self.value(), Op::Neg(self.id()))
    }
}

impl Neg for Var {
    type Output = Var;

    fn neg(self) -> Var {
        -&self
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Var> for Var {
            type Output = Var;

            fn $method(self, rhs: Var) -> Var {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Var> for Var {
            type Output = Var;

            fn $method(self, rhs: &Var) -> Var {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Var> for &Var {
            type Output = Var;

            fn $method(self, rhs: Var) -> Var {
                $imp::$method(self, &rhs)
            }
        }

        impl $imp<f64> for &Var {
            type Output = Var;

            fn $method(self, rhs: f64) -> Var {
                let rhs = self.lift(rhs);
                $imp::$method(self, &rhs)
            }
        }

        impl $imp<f64> for Var {
            type Output = Var;

            fn $method(self, rhs: f64) -> Var {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<&Var> for f64 {
            type Output = Var;

            fn $method(self, rhs: &Var) -> Var {
                let lhs = rhs.lift(self);
                $imp::$method(&lhs, rhs)
            }
        }

        impl $imp<Var> for f64 {
            type Output = Var;

            fn $method(self, rhs: Var) -> Var {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
