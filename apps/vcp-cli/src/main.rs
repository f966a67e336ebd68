use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use vcp_app::{AppConfig, AppResult, Route, Services, load_yaml};

#[derive(Parser)]
#[command(name = "vcp-cli")]
#[command(about = "VCP CLI - resonator stepping and Delta-v metric service", long_about = None)]
struct Cli {
    /// Path to a service configuration YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a resonator state by one or more steps
    Simulate {
        /// Request JSON file, or "-" for stdin
        request: PathBuf,
    },
    /// Compute Delta-v over a batch of samples
    DeltaV {
        /// Request JSON file, or "-" for stdin
        request: PathBuf,
    },
    /// Submit a coupling update
    Coupling {
        /// Request JSON file, or "-" for stdin
        request: PathBuf,
    },
    /// Answer JSON-line requests from stdin until EOF
    Serve,
    /// Print the effective configuration
    ShowConfig,
}

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries responses.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_yaml(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Simulate { request } => cmd_route(&config, Route::Simulate, &request),
        Commands::DeltaV { request } => cmd_route(&config, Route::DeltaV, &request),
        Commands::Coupling { request } => cmd_route(&config, Route::Coupling, &request),
        Commands::Serve => cmd_serve(&config),
        Commands::ShowConfig => cmd_show_config(&config),
    }
}

fn cmd_route(config: &AppConfig, route: Route, request_path: &Path) -> AppResult<()> {
    let services = Services::from_config(config)?;
    let body = read_request(request_path)?;
    tracing::info!(%route, "dispatching request");
    let response = services.dispatch(route, &body)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn cmd_serve(config: &AppConfig) -> AppResult<()> {
    let services = Services::from_config(config)?;
    tracing::info!(
        backend = ?config.backend.kind,
        integrator = ?config.backend.integrator,
        "serving JSON lines on stdin"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut handled = 0usize;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", services.handle_line(&line))?;
        stdout.flush()?;
        handled += 1;
    }

    tracing::info!(handled, "stdin closed");
    Ok(())
}

fn cmd_show_config(config: &AppConfig) -> AppResult<()> {
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}

fn read_request(path: &Path) -> AppResult<Value> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&text)?)
}
