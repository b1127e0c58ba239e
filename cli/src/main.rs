mod commands;
mod terminal;

use basics_common::config::Config;
use commands::{CommandLine, Commands, calc, demo, greet};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging();
    print::initialize(&cfg);
    print::banner(&cfg);

    let result = match commands.command {
        Commands::Calc { a, op, b } => {
            print::header("calculator", &cfg);
            calc::calc(a, op, b, &cfg)
        }
        Commands::Greet { name } => {
            print::header("greeter", &cfg);
            greet::greet(name.as_deref(), &cfg);
            Ok(())
        }
        Commands::Demo { program } => {
            print::header("demo", &cfg);
            demo::demo(program, &cfg)
        }
    };

    print::end_of_program(&cfg);
    result
}
