#![cfg(test)]
use basics_core::{Calculator, CalculatorError, Operation};

/// Runs every operation from another thread at the same time and checks
/// that the results match the sequential ones.
#[test]
fn calculator_is_shareable_across_threads() {
    let calc: Calculator = Calculator::new();
    let handles: Vec<_> = (-4..=4)
        .map(|b: i32| {
            std::thread::spawn(move || {
                Operation::ALL
                    .iter()
                    .map(|op| calc.apply(*op, 17, b))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (handle, b) in handles.into_iter().zip(-4..=4) {
        let results = handle.join().expect("worker panicked");
        let expected: Vec<_> = Operation::ALL.iter().map(|op| calc.apply(*op, 17, b)).collect();
        assert_eq!(results, expected, "b = {}", b);
    }
}

#[test]
fn concrete_scenarios() {
    let calc: Calculator = Calculator::new();
    assert_eq!(calc.add(2, 3), 5);
    assert_eq!(calc.subtract(3, 5), -2);
    assert_eq!(calc.multiply(-2, -3), 6);
    assert_eq!(calc.divide(7, 2), Ok(3));
    assert_eq!(calc.modulo(10, 2), Ok(0));
}

#[test]
fn sign_rules() {
    let calc: Calculator = Calculator::new();
    assert_eq!(calc.modulo(-7, 3), Ok(-1));
    assert_eq!(calc.modulo(7, -3), Ok(1));
    assert_eq!(calc.divide(-7, 2), Ok(-3));
}

#[test]
fn divisor_zero_fails_through_apply() {
    let calc: Calculator = Calculator::new();
    for op in [Operation::Divide, Operation::Modulo] {
        let result = calc.apply(op, 42, 0);
        assert_eq!(result, Err(CalculatorError::DivisionByZero), "op = {}", op);
    }
    for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
        assert!(calc.apply(op, 42, 0).is_ok(), "op = {}", op);
    }
}

#[test]
fn parsed_operation_evaluates() {
    let calc: Calculator = Calculator::new();
    let op: Operation = "%".parse().expect("valid operator");
    assert_eq!(calc.apply(op, -7, 3), Ok(-1));
}
