use crate::autograd::Var;
use crate::dual::Dual;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Operations shared by both differentiation engines.
///
/// Writing an expression once against `Scalar` lets the same code build a
/// reverse-mode graph (with [`Var`]) or run a forward-mode evaluation (with
/// [`Dual`]).
pub trait Scalar:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// The primal value.
    fn value(&self) -> f64;

    fn powf(&self, exponent: f64) -> Self;

    fn relu(&self) -> Self;

    fn sin(&self) -> Self;

    fn cos(&self) -> Self;

    fn exp(&self) -> Self;

    fn log(&self) -> Self;
}

impl Scalar for Var {
    fn value(&self) -> f64 {
        Var::value(self)
    }

    fn powf(&self, exponent: f64) -> Self {
        Var::powf(self, exponent)
    }

    fn relu(&self) -> Self {
        Var::relu(self)
    }

    fn sin(&self) -> Self {
        Var::sin(self)
    }

    fn cos(&self) -> Self {
        Var::cos(self)
    }

    fn exp(&self) -> Self {
        Var::exp(self)
    }

    fn log(&self) -> Self {
        Var::log(self)
    }
}

impl Scalar for Dual {
    fn value(&self) -> f64 {
        Dual::value(self)
    }

    fn powf(&self, exponent: f64) -> Self {
        Dual::powf(*self, exponent)
    }

    fn relu(&self) -> Self {
        Dual::relu(*self)
    }

    fn sin(&self) -> Self {
        Dual::sin(*self)
    }

    fn cos(&self) -> Self {
        Dual::cos(*self)
    }

    fn exp(&self) -> Self {
        Dual::exp(*self)
    }

    fn log(&self) -> Self {
        Dual::log(*self)
    }
}
