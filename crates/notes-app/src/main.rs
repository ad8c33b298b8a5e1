//! Notes: a first-person note explorer for the terminal
//!
//! Usage:
//!   notes            # explore
//!   notes --resize   # follow terminal size changes
//!   notes --debug    # developer overlay, press V to open the demo text

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "notes", version, about = "Walk around and read the notes floating in the field")]
struct Cli {
    /// Follow size changes of the terminal instead of keeping the startup size
    #[arg(long)]
    resize: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = notes_app::Options {
        resize: cli.resize,
        debug: cli.debug,
    };

    if let Err(e) = notes_app::run(options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
