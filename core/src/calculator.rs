//! # Integer Calculator
//!
//! Five binary operations over `i32`.
//!
//! All arithmetic is two's-complement wrapping: results past the `i32`
//! bounds wrap around instead of panicking. Division truncates toward zero
//! and the remainder takes the sign of the dividend, so for every `b != 0`:
//!
//! ```text
//! divide(a, b) * b + modulo(a, b) == a
//! ```

use thiserror::Error;
use tracing::debug;

use crate::operation::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Stateless integer calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "add");
        a.wrapping_add(b)
    }

    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "subtract");
        a.wrapping_sub(b)
    }

    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "multiply");
        a.wrapping_mul(b)
    }

    /// Quotient of `a / b`, truncated toward zero.
    ///
    /// `i32::MIN / -1` wraps to `i32::MIN`.
    pub fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        debug!(a, b, "divide");
        if b == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }

    /// Remainder of `a / b`, carrying the sign of `a`.
    pub fn modulo(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        debug!(a, b, "modulo");
        if b == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a.wrapping_rem(b))
    }

    /// Runs `op` on the two operands.
    pub fn apply(&self, op: Operation, a: i32, b: i32) -> Result<i32, CalculatorError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
            Operation::Modulo => self.modulo(a, b),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
