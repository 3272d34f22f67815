// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use the_lexigraph::config::{load_config, validate_config, Config, DependencyGraph, RuntimeBuilder};
use the_lexigraph::features::FeatureId;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: the-lexigraph [--config <file>] [--order <n>] <text> [<text> ...]
       the-lexigraph [--order <n>] --plan <feature>
       Text starting with '@' is read from the named file.";

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    config: Option<String>,
    order: Option<usize>,
    plan: Option<String>,
    texts: Vec<String>,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file")?;
                parsed.config = Some(path.clone());
            }
            "--order" => {
                let order = args.next().context("--order needs a number")?;
                parsed.order = Some(
                    order
                        .parse()
                        .with_context(|| format!("invalid tag-gram order '{}'", order))?,
                );
            }
            "--plan" => {
                let feature = args.next().context("--plan needs a feature name")?;
                parsed.plan = Some(feature.clone());
            }
            "-h" | "--help" => bail!("{}", USAGE),
            _ => parsed.texts.push(read_input(arg)?),
        }
    }

    if parsed.texts.is_empty() && parsed.plan.is_none() {
        bail!("no input text given\n{}", USAGE);
    }
    Ok(parsed)
}

fn read_input(arg: &str) -> anyhow::Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read input file '{}'", path))
        }
        None => Ok(arg.to_string()),
    }
}

fn build_config(args: &CliArgs) -> anyhow::Result<Config> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path).map_err(|e| anyhow!("failed to load '{}': {}", path, e))?,
        None => Config::default(),
    };
    if let Some(order) = args.order {
        cfg.tagram_order = order;
    }

    if let Err(errors) = validate_config(&cfg) {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Configuration validation failed:\n{}", messages.join("\n"));
    }
    Ok(cfg)
}

/// Evaluation order of a feature, dependencies first.
fn plan(name: &str, tagram_order: usize) -> anyhow::Result<Vec<String>> {
    let feature = FeatureId::from_name(name).with_context(|| format!("Unknown feature: '{}'", name))?;
    let order = DependencyGraph::from_catalog(tagram_order).evaluation_order(feature)?;
    Ok(order.iter().map(|f| f.name().into_owned()).collect())
}

async fn run(args: CliArgs) -> anyhow::Result<bool> {
    let cfg = build_config(&args)?;

    if let Some(name) = &args.plan {
        println!("{}", plan(name, cfg.tagram_order)?.join(" -> "));
        return Ok(true);
    }
    let (_, batch, strategy) = RuntimeBuilder::from_config(&cfg).map_err(|e| anyhow!(e))?;

    // Fail-fast ends here; other strategies leave failed samples in the outcome.
    let outcome = batch.run(args.texts, strategy).await?;

    for result in outcome.results() {
        match result {
            Ok(vector) => println!("{}", serde_json::to_string_pretty(vector)?),
            Err(e) => eprintln!("❌ {}", e),
        }
    }
    Ok(outcome.is_complete())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
