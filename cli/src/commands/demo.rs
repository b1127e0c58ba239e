//! The two demonstration programs: a fixed sequence of calculator
//! invocations and a fixed sequence of greetings.

use anyhow::Context;
use basics_common::config::Config;
use basics_core::{Calculator, CalculatorError, Greeter, Operation};

use crate::commands::DemoProgram;
use crate::terminal::print;

pub const CALCULATOR_TITLE: &str = "=== Calculator Application ===";
pub const HELLO_WORLD_TITLE: &str = "=== Hello World Application ===";

const CALCULATOR_STEPS: [(&str, Operation, i32, i32); 4] = [
    ("5 + 3", Operation::Add, 5, 3),
    ("10 - 4", Operation::Subtract, 10, 4),
    ("8 + (-2)", Operation::Add, 8, -2),
    ("15 - 7", Operation::Subtract, 15, 7),
];

const GREETED: [&str; 3] = ["Alice", "Bob", "C++ Developer"];

pub fn demo(program: DemoProgram, cfg: &Config) -> anyhow::Result<()> {
    let (title, lines) = match program {
        DemoProgram::Calculator => (
            CALCULATOR_TITLE,
            calculator_lines(&Calculator::new()).context("calculator demo failed")?,
        ),
        DemoProgram::HelloWorld => (HELLO_WORLD_TITLE, hello_world_lines(&Greeter::new())),
    };

    print::demo_title(title, cfg);
    for line in &lines {
        print::demo_line(line, cfg);
    }
    Ok(())
}

pub fn calculator_lines(calc: &Calculator) -> Result<Vec<String>, CalculatorError> {
    CALCULATOR_STEPS
        .iter()
        .map(|(label, op, a, b)| {
            calc.apply(*op, *a, *b)
                .map(|value| format!("{} = {}", label, value))
        })
        .collect()
}

pub fn hello_world_lines(greeter: &Greeter) -> Vec<String> {
    std::iter::once(greeter.default_greeting().to_string())
        .chain(GREETED.iter().map(|name| greeter.greet(name)))
        .collect()
}
