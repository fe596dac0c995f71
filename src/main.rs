use clap::Parser;
use roman_numerals::{
    logger::init_cli_logger,
    repl::{execute, parse_command},
};
use std::io::{self, BufRead, Write};

/// Roman numeral calculator
#[derive(Parser, Debug)]
#[command(name = "roman", version, about)]
struct Cli {
    /// Log each cancellation and borrow step
    #[arg(short, long)]
    verbose: bool,

    /// Run a single command (e.g. `add MVIIII MXVIII`) instead of the shell
    command: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    if !cli.command.is_empty() {
        match run_line(&cli.command.join(" ")) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Roman Numeral Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'EXIT' to quit, 'HELP' for help\n");

    if let Err(e) = shell() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_line(line: &str) -> roman_numerals::Result<String> {
    let command = parse_command(line)?;
    execute(&command)
}

fn shell() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Prompt
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        let command = match parse_command(input) {
            Ok(command) => command,
            Err(e) => {
                println!("Error: {}", e);
                continue;
            }
        };

        if command.is_exit() {
            println!("Goodbye!");
            break;
        }

        match execute(&command) {
            Ok(output) => println!("{}", output),
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}
