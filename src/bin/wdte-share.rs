//! CLI tool to make and read WDTE playground share links.
//!
//! Usage:
//!   wdte-share encode program.wdte
//!   wdte-share encode program.wdte --base-url https://example.org/playground/
//!   wdte-share encode program.wdte --compact
//!   wdte-share decode 'https://example.org/playground/#1:fib%2030'
//!   wdte-share examples [--id fib]
//!
//! Without a file, `encode` reads the program from stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;
use wdte_playground::{
    DecodeError, EXAMPLES, catalog, decode, encode, encode_compact, fragment_of,
};

#[derive(Parser)]
#[command(name = "wdte-share", about = "Make and read WDTE playground share links")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a program into a share fragment
    Encode {
        /// Program file (stdin when omitted)
        file: Option<PathBuf>,

        /// Print a full link under this playground URL
        #[arg(long)]
        base_url: Option<String>,

        /// Use the shorter, compressed link format
        #[arg(long)]
        compact: bool,
    },
    /// Print the program carried by a fragment or link
    Decode {
        /// Bare fragment, `#fragment`, or full link
        link: String,
    },
    /// List the canned examples
    Examples {
        /// Print the share fragment of one example
        #[arg(long)]
        id: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reading '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid share link: {0}")]
    Decode(#[from] DecodeError),

    #[error("no example with id '{0}'")]
    UnknownExample(String),
}

fn read_program(file: Option<&PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

fn execute(command: Command) -> Result<(), CliError> {
    match command {
        Command::Encode {
            file,
            base_url,
            compact,
        } => {
            let program = read_program(file.as_ref())?;
            let fragment = if compact {
                encode_compact(&program)
            } else {
                encode(&program)
            };
            log::debug!("{} bytes -> {} byte fragment", program.len(), fragment.len());
            match base_url {
                // The base URL may already carry an old fragment.
                Some(base) => println!("{}#{}", base.split('#').next().unwrap_or(""), fragment),
                None => println!("{}", fragment),
            }
        }
        Command::Decode { link } => {
            let program = decode(fragment_of(&link))?;
            print!("{}", program);
            if !program.is_empty() && !program.ends_with('\n') {
                println!();
            }
        }
        Command::Examples { id: Some(id) } => {
            let example = catalog::find(&id).ok_or(CliError::UnknownExample(id))?;
            println!("{}", encode(example.input));
        }
        Command::Examples { id: None } => {
            for example in EXAMPLES {
                println!("{:<14} {}", example.id, example.name);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Error initializing logger: {}", e);
    }

    if let Err(e) = execute(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
