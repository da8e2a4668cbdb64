use clap::{Parser as ClapParser, Subcommand};
use fauna_query::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "fq")]
#[command(about = "fq - Validate and normalize FaunaDB wire-format JSON")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode wire JSON and print its canonical encoding
    Check {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate, don't print the re-encoding
        #[arg(long)]
        syntax_only: bool,
    },

    /// List reserved keywords, optionally for one category
    Keywords {
        /// Category name (omit to list all categories)
        category: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            input,
            pretty,
            syntax_only,
        } => run_check(input, pretty, syntax_only),
        Commands::Keywords { category: None } => {
            print!("{}", cli::get_keywords_overview());
            Ok(())
        }
        Commands::Keywords {
            category: Some(category),
        } => cli::get_keyword_category(&category).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(input: Option<String>, pretty: bool, syntax_only: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        input,
        pretty,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::Valid => println!("Wire JSON is valid"),
        CheckResult::Success(output) if pretty => println!("{:#}", output),
        CheckResult::Success(output) => println!("{}", output),
    }
    Ok(())
}
