//! Command-line front end.
//!
//! Parses arguments with `clap`, calls the library and renders the result as
//! a string so that `main` only has to print it.

use crate::config::ProviderConfig;
use crate::models::{parse_cidr, parse_cidrs, Dialect, OptionalValue};
use crate::output::{format_bool, format_map, format_overlaps};
use crate::processing::{
    any_overlap, build_aws_tags, build_kube_labels, cidr_contains, count_hosts,
    overlapping_pairs, sanitize_key, sanitize_map, sanitize_value,
};
use clap::{Parser, Subcommand};
use std::error::Error;

/// CIDR analysis and tag / label sanitization.
#[derive(Parser, Debug)]
#[command(name = "pf-functions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether an IPv4 address is in a CIDR block
    CidrContains {
        /// CIDR block, e.g. 10.0.0.0/24
        cidr: String,
        /// IPv4 address, e.g. 10.0.0.5
        address: String,
    },

    /// Count usable hosts in a CIDR block
    CidrCountHosts {
        /// CIDR block, e.g. 10.0.0.0/24
        cidr: String,
    },

    /// Check whether any of the given CIDR blocks overlap
    CidrsOverlap {
        /// CIDR blocks to compare
        cidrs: Vec<String>,
    },

    /// Sanitize a single key or value
    Sanitize {
        /// Text to sanitize
        text: String,
        /// Identifier dialect (aws or kubernetes)
        #[arg(short, long, default_value = "aws")]
        dialect: Dialect,
        /// Apply key rules instead of value rules
        #[arg(short, long)]
        key: bool,
    },

    /// Sanitize AWS tags given as KEY=VALUE pairs
    SanitizeAwsTags {
        #[arg(value_parser = parse_key_value)]
        tags: Vec<(String, String)>,
    },

    /// Sanitize Kubernetes labels given as KEY=VALUE pairs
    SanitizeKubeLabels {
        #[arg(value_parser = parse_key_value)]
        labels: Vec<(String, String)>,
    },

    /// Standard AWS tags for a module
    AwsTags {
        /// Module the tags are for
        #[arg(short, long)]
        module: String,
        /// Region to use instead of the configured one
        #[arg(short, long)]
        region_override: Option<String>,
        /// JSON config file (defaults to PF_* environment variables)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Standard Kubernetes labels for a module
    KubeLabels {
        /// Module the labels are for
        #[arg(short, long)]
        module: String,
        /// JSON config file (defaults to PF_* environment variables)
        #[arg(short, long)]
        config: Option<String>,
    },
}

/// Split `KEY=VALUE` on the first `=`. The value may be empty or contain `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn load_config(path: Option<&str>) -> Result<ProviderConfig, Box<dyn Error>> {
    let config = match path {
        Some(path) => ProviderConfig::from_json_file(path)?,
        None => ProviderConfig::from_env()?,
    };
    Ok(config)
}

/// Execute a parsed command and return the text to print.
pub fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let color = !cli.no_color;
    log::debug!("run({:?})", cli.command);

    let out = match &cli.command {
        Commands::CidrContains { cidr, address } => {
            let block = parse_cidr(cidr)?;
            format_bool(cidr_contains(&block, address)?, color)
        }
        Commands::CidrCountHosts { cidr } => count_hosts(&parse_cidr(cidr)?).to_string(),
        Commands::CidrsOverlap { cidrs } => {
            let blocks = parse_cidrs(cidrs.as_slice())?;
            let overlap = any_overlap(&blocks);
            if overlap && cli.verbose {
                format!(
                    "{}\n{}",
                    format_bool(overlap, color),
                    format_overlaps(&overlapping_pairs(&blocks))
                )
            } else {
                format_bool(overlap, color)
            }
        }
        Commands::Sanitize { text, dialect, key } => {
            if *key {
                sanitize_key(text, *dialect)
            } else {
                sanitize_value(text, *dialect)
            }
        }
        Commands::SanitizeAwsTags { tags } => {
            format_map(&sanitize_map(tags.iter().cloned(), Dialect::Aws))?
        }
        Commands::SanitizeKubeLabels { labels } => {
            format_map(&sanitize_map(labels.iter().cloned(), Dialect::Kubernetes))?
        }
        Commands::AwsTags {
            module,
            region_override,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let region_override = OptionalValue::from(region_override.clone());
            format_map(&build_aws_tags(
                &config,
                &OptionalValue::present(module.as_str()),
                &region_override,
            ))?
        }
        Commands::KubeLabels { module, config } => {
            let config = load_config(config.as_deref())?;
            format_map(&build_kube_labels(
                &config,
                &OptionalValue::present(module.as_str()),
            ))?
        }
    };
    Ok(out)
}
