use std::process::ExitCode;

use roster_core::RosterConfig;
use roster_directory::cli;
use roster_directory::Directory;

// roster-directory [clients|employees] [key=value ...]
//
// Query keys: search, $sort, $dir, $page, $limit; any other key filters on
// the field of that name, e.g. `isActive=active status=cliente-activo`.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run().await {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", cli::error_json(err));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<String> {
    let mut config = RosterConfig::new();
    config.load_env("ROSTER__");
    let dir = Directory::with_config(config)?;

    let (table, pairs) = cli::parse_args(std::env::args().skip(1));
    cli::render(&dir, table, &pairs).await
}
