use agilekit::ui::banner::Banner;
use agilekit::ui::hint;
use agilekit::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

#[derive(Parser)]
#[command(name = "agile")]
#[command(author = "Wangkanai")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AgileKit CLI tool", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// output the version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new AgileKit project
    Init,

    /// Upgrade the application to the latest version
    Upgrade,

    /// Check the application for issues
    Check,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => agilekit::cli::init::run()?,

        Some(Commands::Upgrade) => agilekit::cli::upgrade::run()?,

        Some(Commands::Check) => agilekit::cli::check::run()?,

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "agile", &mut io::stdout());
        }

        None => greet(),
    }

    Ok(())
}

/// Bare invocation: banner, welcome line, usage hint.
fn greet() {
    Banner::block().print();
    println!();
    println!("Welcome to AgileKit CLI! Use --help to see available commands.");
    hint::print();
}
