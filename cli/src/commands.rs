pub mod calc;
pub mod demo;
pub mod greet;

use basics_core::Operation;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "basics")]
#[command(about = "Integer arithmetic and greetings.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq prints bare results)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a single integer operation, e.g. `calc -7 / 2`
    #[command(alias = "c")]
    Calc {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        /// One of + - * / % (or add, sub, mul, div, mod)
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Greet someone, or the world when no name is given
    #[command(alias = "g")]
    Greet { name: Option<String> },
    /// Run one of the built-in demonstration programs
    #[command(alias = "d")]
    Demo {
        #[arg(value_enum)]
        program: DemoProgram,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoProgram {
    Calculator,
    HelloWorld,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
