use clap::Parser;
use maxim::application::AppSession;
use maxim::cli::Cli;
use maxim::error::MaximError;
use maxim::infrastructure::{FileSystemRepository, NullRepository, SayingRepository};
use std::io;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MaximError> {
    let repository: Box<dyn SayingRepository> = match &cli.db_dir {
        Some(dir) => Box::new(FileSystemRepository::open(dir)?),
        None => Box::new(NullRepository),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = AppSession::new(stdin.lock(), stdout.lock(), repository)?;
    session.run()
}
