use anyhow::Context;
use basics_common::config::Config;
use basics_core::{Calculator, Operation};

use crate::terminal::print;

pub fn calc(a: i32, op: Operation, b: i32, cfg: &Config) -> anyhow::Result<()> {
    let result: i32 = evaluate(a, op, b)?;
    print::result_line(&expression(a, op, b), result, cfg);
    Ok(())
}

fn evaluate(a: i32, op: Operation, b: i32) -> anyhow::Result<i32> {
    Calculator::new()
        .apply(op, a, b)
        .with_context(|| format!("failed to evaluate {}", expression(a, op, b)))
}

fn expression(a: i32, op: Operation, b: i32) -> String {
    if b < 0 {
        format!("{} {} ({})", a, op, b)
    } else {
        format!("{} {} {}", a, op, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basics_core::CalculatorError;

    #[test]
    fn test_expression_parenthesizes_negative_rhs() {
        assert_eq!(expression(8, Operation::Add, -2), "8 + (-2)");
        assert_eq!(expression(-7, Operation::Divide, 2), "-7 / 2");
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(7, Operation::Divide, 2).unwrap(), 3);
        assert_eq!(evaluate(-7, Operation::Modulo, 3).unwrap(), -1);
    }

    #[test]
    fn test_evaluate_division_by_zero_has_context() {
        let err = evaluate(7, Operation::Divide, 0).unwrap_err();
        assert_eq!(err.to_string(), "failed to evaluate 7 / 0");
        assert_eq!(
            err.downcast_ref::<CalculatorError>(),
            Some(&CalculatorError::DivisionByZero)
        );
    }
}
