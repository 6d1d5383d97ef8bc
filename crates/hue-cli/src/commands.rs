use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use hue_server::{build_schema, HueServer, ServerConfig, PORT_ENV};
use hue_store::InMemoryColorStore;
use hue_types::ColorValue;
use serde::Serialize;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Check(args) => cmd_check(args, &cli.format),
        Command::Schema(_) => cmd_schema(),
    }
}

/// Config file, then `$PORT`, then command-line flags.
pub fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let port = std::env::var(PORT_ENV).ok();
    resolve_config_with_port(args, port.as_deref())
}

fn resolve_config_with_port(args: &ServeArgs, port: Option<&str>) -> anyhow::Result<ServerConfig> {
    let config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    let mut config = config.with_port(port)?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(seed) = &args.seed {
        config.seed_path = Some(seed.clone());
    }
    if args.no_playground {
        config.playground = false;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    tracing::debug!(?config, "resolved server config");
    let server = HueServer::new(config).context("starting server")?;
    println!(
        "{} Hue GraphQL on {}",
        "✓".green().bold(),
        format!("http://{}/graphql", server.config().bind_addr).bold()
    );
    server.serve().await?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub input: String,
    pub color: Option<String>,
    pub error: Option<String>,
}

pub fn check_colors(inputs: &[String]) -> Vec<CheckOutcome> {
    inputs
        .iter()
        .map(|input| match ColorValue::parse(input) {
            Ok(color) => CheckOutcome {
                input: input.clone(),
                color: Some(color.to_hex()),
                error: None,
            },
            Err(e) => CheckOutcome {
                input: input.clone(),
                color: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let outcomes = check_colors(&args.colors);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            for outcome in &outcomes {
                match (&outcome.color, &outcome.error) {
                    (Some(color), _) => {
                        println!("{} {} → {}", "✓".green(), outcome.input, color.cyan())
                    }
                    (None, Some(error)) => println!("{} {}", "✗".red(), error),
                    (None, None) => {}
                }
            }
        }
    }

    let invalid = outcomes.iter().filter(|o| o.error.is_some()).count();
    if invalid > 0 {
        anyhow::bail!("{invalid} invalid color value(s)");
    }
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = build_schema(Arc::new(InMemoryColorStore::new()));
    print!("{}", schema.sdl());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn serve_args(argv: &[&str]) -> ServeArgs {
        let mut full = vec!["hue", "serve"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Serve(args) => args,
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn check_reports_each_input() {
        let outcomes = check_colors(&["Red".into(), "bogus".into(), "rgb(0, 0, 255)".into()]);
        assert_eq!(outcomes[0].color.as_deref(), Some("#ff0000"));
        assert!(outcomes[0].error.is_none());
        assert_eq!(outcomes[1].error.as_deref(), Some("invalid hex color value: bogus"));
        assert!(outcomes[1].color.is_none());
        assert_eq!(outcomes[2].color.as_deref(), Some("#0000ff"));
    }

    #[test]
    fn check_fails_on_invalid_input() {
        let args = CheckArgs { colors: vec!["#zz".into()] };
        assert!(cmd_check(args, &OutputFormat::Json).is_err());
        let args = CheckArgs { colors: vec!["#abc".into()] };
        assert!(cmd_check(args, &OutputFormat::Text).is_ok());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:7000\"\nplayground = true").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = resolve_config_with_port(
            &serve_args(&["--config", &path, "--bind", "0.0.0.0:9999", "--no-playground"]),
            Some("8080"),
        )
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9999".parse().unwrap());
        assert!(!config.playground);
    }

    #[test]
    fn seed_flag_sets_seed_path() {
        let config = resolve_config_with_port(&serve_args(&["--seed", "colors.json"]), None).unwrap();
        assert_eq!(config.seed_path.unwrap().to_str(), Some("colors.json"));
    }

    #[test]
    fn port_applies_without_bind_flag() {
        let config = resolve_config_with_port(&serve_args(&[]), Some("8080")).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(resolve_config_with_port(&serve_args(&[]), Some("not-a-port")).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = resolve_config_with_port(&serve_args(&["--config", "/no/such/hue.toml"]), None)
            .unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
