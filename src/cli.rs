//! Command-line interface for exercising a route configuration.
//!
//! Resolves paths and builds URLs against a config file from the shell,
//! which is handy for debugging rewrite rules without an application around
//! the router. The MCA parameter names and module list come from the config
//! file's `system.mca_names` / `system.modules` entries.

use crate::config::load_config;
use crate::context::{Params, RequestContext};
use crate::router::{Router, RouterConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mcaroute")]
#[command(about = "Bidirectional MCA URL router CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a request path into module/controller/action and params
    Decode {
        #[arg(short = 'f', long)]
        config: PathBuf,

        /// Request path, without scheme/host/query string
        path: String,
    },
    /// Build a URL from module/controller/action and params
    Encode {
        #[arg(short = 'f', long)]
        config: PathBuf,

        #[arg(short, long, default_value = "")]
        module: String,

        #[arg(short, long, default_value = "")]
        controller: String,

        #[arg(short, long, default_value = "")]
        action: String,

        /// Extra parameters as key=value, in order
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Check whether a path matches the ignore list (exit code 1 if not)
    Ignore {
        #[arg(short = 'f', long)]
        config: PathBuf,

        path: String,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn build_router(config_path: &PathBuf) -> anyhow::Result<Router> {
    let config = load_config(config_path)?;
    let identity = RouterConfig::from_system(&config.system);
    Ok(Router::new(identity, config))
}

pub fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run_command(&cli.command)
}

pub fn run_command(command: &Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Decode { config, path } => {
            let router = build_router(config)?;
            let mut ctx = RequestContext::new();
            router.decode(path, &mut ctx);
            for (key, value) in ctx.iter() {
                println!("{key}={value}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Encode {
            config,
            module,
            controller,
            action,
            params,
        } => {
            let router = build_router(config)?;
            let params: Params = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            println!("{}", router.encode(module, controller, action, &params));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ignore { config, path } => {
            let router = build_router(config)?;
            let ignored = router.ignore(path);
            println!("{ignored}");
            Ok(if ignored {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
