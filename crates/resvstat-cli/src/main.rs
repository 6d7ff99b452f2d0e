use clap::Parser;
use clap::error::ErrorKind;

use resvstat::{Cli, Session, TOOL};
use resvstat_client::{ClientConfig, WireConnector};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            // Bad flags: usage goes to stderr, nothing is queried.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", TOOL, e);
            std::process::exit(1);
        }
    };

    let connector = WireConnector::new(config.default_server());
    let mut session = Session::new(
        connector,
        cli.display_mode(),
        std::io::stdout().lock(),
        std::io::stderr().lock(),
    );

    match session.run(&cli.targets) {
        Ok(status) => std::process::exit(status),
        Err(fatal) => std::process::exit(fatal.code),
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
