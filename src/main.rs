use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

use showcase_store::api::{self, Method};
use showcase_store::backend::factory;
use showcase_store::config::{BackendKind, Config};
use showcase_store::logger;

#[derive(Parser, Debug)]
#[command(name = "showcase-store", about = "Query and edit showcase content", version)]
struct CliArgs {
    #[arg(long, value_name = "FILE", help = "Path to a configuration file (TOML)")]
    config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        help = "Write a default configuration file (to the user config directory if FILE is omitted) and exit",
        exclusive = true
    )]
    init_config: Option<Option<PathBuf>>,

    #[arg(long, env = "SHOWCASE_BACKEND", value_name = "BACKEND", help = "Override storage.backend")]
    backend: Option<BackendKind>,

    #[arg(long, env = "SHOWCASE_DATABASE_URL", value_name = "URL", help = "Override storage.database_url")]
    database_url: Option<String>,

    #[arg(value_name = "METHOD", help = "GET, POST, PATCH or DELETE")]
    method: Option<Method>,

    #[arg(value_name = "PATH", help = "Request path, e.g. /api/acts")]
    path: Option<String>,

    #[arg(value_name = "BODY", help = "JSON request body")]
    body: Option<String>,
}

impl CliArgs {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load()?,
        };
        if let Some(backend) = self.backend {
            config.storage.backend = backend;
        }
        if let Some(url) = &self.database_url {
            config.storage.database_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = CliArgs::parse();

    if let Some(target) = &cli.init_config {
        let path = match target {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let (Some(method), Some(path)) = (cli.method, cli.path.as_deref()) else {
        anyhow::bail!("METHOD and PATH are required, e.g. `showcase-store GET /api/acts`");
    };
    let body = cli
        .body
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("BODY is not valid JSON")?;

    let config = cli.load_config()?;
    logger::init(&config.logging)?;

    let store = factory::open(&config.storage).await?;
    let response = api::dispatch(&*store, method, path, body).await;

    eprintln!("{}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
