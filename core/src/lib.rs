//! # Basics Core
//!
//! Two independent, stateless utilities:
//!
//! * **[`calculator`]**: wrapping `i32` arithmetic with truncating division.
//! * **[`greeter`]**: greeting strings.
//!
//! Both types are zero-sized and `Copy`; every call is a pure function of
//! its arguments, so they can be shared across threads freely.

pub mod calculator;
pub mod greeter;
pub mod operation;

pub use calculator::{Calculator, CalculatorError};
pub use greeter::Greeter;
pub use operation::{Operation, ParseOperationError};
