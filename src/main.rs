//! CLI for markgate - markdown rendering, sanitizing and print export

use clap::{Parser, Subcommand};
use markgate::config::load_policy;
use markgate::logging::{init_logging, LogFormat};
use markgate::{transform, ContentSource, MemoryPage, Printer, Roadmap};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log output format: plain or json (logs go to stderr)
    #[arg(long, global = true, default_value = "plain")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert markdown and sanitize it for a display surface
    Render {
        /// Input markdown file (reads stdin if not specified)
        input: Option<PathBuf>,

        /// Display surface: notes, summary, roadmap or question-bank
        #[arg(long, default_value = "notes")]
        source: ContentSource,

        /// TOML policy file replacing the surface's default policy
        #[arg(long)]
        policy_file: Option<PathBuf>,

        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert markdown to HTML without sanitizing
    Transform {
        /// Input markdown file (reads stdin if not specified)
        input: Option<PathBuf>,

        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a standalone print document
    Print {
        /// Input markdown file (reads stdin if not specified)
        input: Option<PathBuf>,

        /// Display surface: notes, summary, roadmap or question-bank
        #[arg(long, default_value = "notes")]
        source: ContentSource,

        /// Video URL, file name or roadmap topic shown in the header
        #[arg(long)]
        subject: Option<String>,

        /// Roadmap JSON payload; replaces INPUT for the roadmap surface
        #[arg(long)]
        roadmap_json: Option<PathBuf>,

        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_format) {
        eprintln!("Error initializing logging: {}", e);
        std::process::exit(1);
    }

    let (html, output) = match args.command {
        Command::Render {
            input,
            source,
            policy_file,
            output,
        } => {
            let text = read_input(input.as_deref());
            let fragment = match policy_file {
                Some(path) => match load_policy(&path) {
                    Ok(policy) => source.render_with(text.as_str(), &policy),
                    Err(e) => {
                        eprintln!("Error loading policy {:?}: {}", path, e);
                        std::process::exit(1);
                    }
                },
                None => source.render(text.as_str()),
            };
            (fragment.into_string(), output)
        }
        Command::Transform { input, output } => {
            let text = read_input(input.as_deref());
            (transform(text.as_str()), output)
        }
        Command::Print {
            input,
            source,
            subject,
            roadmap_json,
            output,
        } => {
            let document = match roadmap_json {
                Some(path) => match Roadmap::from_json_path(&path) {
                    Ok(roadmap) => roadmap.print_document(),
                    Err(e) => {
                        eprintln!("Error reading roadmap {:?}: {}", path, e);
                        std::process::exit(1);
                    }
                },
                None => {
                    let text = read_input(input.as_deref());
                    source.print_document(subject.as_deref(), &text)
                }
            };

            let printer = Printer::new(MemoryPage::new(document.title.clone(), ""));
            if let Err(e) = printer.print(&document) {
                eprintln!("Error printing document: {}", e);
                std::process::exit(1);
            }
            match printer.into_host().take_jobs().pop() {
                Some(job) => (job, output),
                None => {
                    eprintln!("Error printing document: no print job was recorded");
                    std::process::exit(1);
                }
            }
        }
    };

    match output {
        Some(output) => {
            if let Err(e) = std::fs::write(&output, &html) {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
            println!("Successfully wrote {:?}", output);
        }
        None => println!("{}", html),
    }
}

fn read_input(path: Option<&Path>) -> String {
    let result = match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map(|_| text)
        }
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    }
}
