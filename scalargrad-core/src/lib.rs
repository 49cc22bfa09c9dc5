//! # scalargrad-core
//!
//! Scalar automatic differentiation in two flavours:
//!
//! - [`autograd`]: reverse mode. Operations on [`Var`] record nodes in a
//!   [`Graph`]; [`Var::backward`] fills in the gradient of every node the
//!   loss depends on.
//! - [`dual`]: forward mode. A [`Dual`] carries one directional derivative
//!   alongside its value.
//!
//! [`nn`], [`optim`] and [`config`] are a small network, optimizer and
//! training configuration built on top of the reverse-mode engine.

pub mod autograd;
pub mod config;
pub mod dual;
pub mod error;
pub mod nn;
pub mod optim;
pub mod scalar;
pub mod utils;

pub use autograd::{Graph, Var};
pub use config::TrainConfig;
pub use dual::Dual;
pub use error::ScalarGradError;
pub use scalar::Scalar;
