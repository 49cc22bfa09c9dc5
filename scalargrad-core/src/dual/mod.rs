//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual`] carries a value and the derivative of that value with respect
//! to the single input that was seeded with derivative `1.0`. Every
//! operation is a closed-form rule over its operands' pairs: there is no
//! graph and no backward step.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value paired with its directional derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    value: f64,
    derivative: f64,
}

impl Dual {
    pub fn new(value: f64, derivative: f64) -> Self {
        Dual { value, derivative }
    }

    /// The variable being differentiated against (derivative `1.0`).
    pub fn variable(value: f64) -> Self {
        Dual::new(value, 1.0)
    }

    /// A constant input (derivative `0.0`).
    pub fn constant(value: f64) -> Self {
        Dual::new(value, 0.0)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn derivative(&self) -> f64 {
        self.derivative
    }

    /// `self^exponent` for a constant exponent.
    pub fn powf(self, exponent: f64) -> Self {
        Dual::new(
            self.value.powf(exponent),
            exponent * self.value.powf(exponent - 1.0) * self.derivative,
        )
    }

    pub fn sin(self) -> Self {
        Dual::new(self.value.sin(), self.value.cos() * self.derivative)
    }

    pub fn cos(self) -> Self {
        Dual::new(self.value.cos(), -self.value.sin() * self.derivative)
    }

    pub fn exp(self) -> Self {
        let value = self.value.exp();
        Dual::new(value, value * self.derivative)
    }

    /// Natural logarithm.
    pub fn log(self) -> Self {
        Dual::new(self.value.ln(), (1.0 / self.value) * self.derivative)
    }

    /// `max(0, self)`, inactive at exactly zero.
    pub fn relu(self) -> Self {
        if self.value > 0.0 {
            self
        } else {
            Dual::constant(0.0)
        }
    }
}

/// Evaluates `func` at `x` seeded as the variable.
///
/// Returns `(f(x), f'(x))`.
pub fn derivative<F>(func: F, x: f64) -> (f64, f64)
where
    F: Fn(Dual) -> Dual,
{
    let out = func(Dual::variable(x));
    (out.value, out.derivative)
}

impl From<f64> for Dual {
    fn from(value: f64) -> Self {
        Dual::constant(value)
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dual(x={}, dx={})", self.value, self.derivative)
    }
}

impl Add for Dual {
    type Output = Dual;

    fn add(self, rhs: Dual) -> Dual {
        Dual::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl Sub for Dual {
    type Output = Dual;

    fn sub(self, rhs: Dual) -> Dual {
        Dual::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl Mul for Dual {
    type Output = Dual;

    fn mul(self, rhs: Dual) -> Dual {
        Dual::new(
            self.value * rhs.value,
            self.value * rhs.derivative + rhs.value * self.derivative,
        )
    }
}

impl Div for Dual {
    type Output = Dual;

    fn div(self, rhs: Dual) -> Dual {
        Dual::new(
            self.value / rhs.value,
            (rhs.value * self.derivative - self.value * rhs.derivative) / (rhs.value * rhs.value),
        )
    }
}

impl Neg for Dual {
    type Output = Dual;

    fn neg(self) -> Dual {
        Dual::new(-self.value, -self.derivative)
    }
}

// Literal promotion in both operand orders.
macro_rules! promote_scalar {
    ($imp:ident, $method:ident) => {
        impl $imp<f64> for Dual {
            type Output = Dual;

            fn $method(self, rhs: f64) -> Dual {
                $imp::$method(self, Dual::constant(rhs))
            }
        }

        impl $imp<Dual> for f64 {
            type Output = Dual;

            fn $method(self, rhs: Dual) -> Dual {
                $imp::$method(Dual::constant(self), rhs)
            }
        }
    };
}

promote_scalar!(Add, add);
promote_scalar!(Sub, sub);
promote_scalar!(Mul, mul);
promote_scalar!(Div, div);

impl Zero for Dual {
    fn zero() -> Self {
        Dual::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivative == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Dual::constant(1.0)
    }
}

impl std::iter::Sum for Dual {
    fn sum<I: Iterator<Item = Dual>>(iter: I) -> Dual {
        iter.fold(Dual::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
#[path = "dual_test.rs"]
mod tests;
