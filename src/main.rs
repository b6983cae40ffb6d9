use anyhow::Result;
use clap::Parser;

use git_latest::config;
use git_latest::resolver::{self, Method};
use git_latest::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-latest",
    about = "Print the latest semver tag reachable from HEAD"
)]
struct Args {
    #[arg(default_value = ".", help = "Path to the repository")]
    path: String,

    #[arg(
        short,
        long,
        help = "Resolution backend: cli (git executable) or lib (embedded libgit2)"
    )]
    method: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Report tags skipped during resolution")]
    verbose: bool,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-latest {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flag wins over the configured default
    let method_name = args.method.unwrap_or(config.defaults.method);
    let method = match method_name.parse::<Method>() {
        Ok(method) => method,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.defaults.verbose;

    let result = if verbose {
        ui::display_status(&format!(
            "Resolving latest tag in '{}' via {} backend",
            args.path, method
        ));
        resolver::latest_with(method, &args.path, |skip| ui::display_skip(&skip))
    } else {
        resolver::latest(method, &args.path)
    };

    match result {
        Ok(version) => {
            ui::display_version(&version);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
