//! Report command implementation.
//!
//! Generates the asset returns, aggregates them into a portfolio and prints
//! the four risk statistics.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use tailrisk_config::{RunConfig, RunOverrides};
use tailrisk_math::quantile::QuantileMethod;
use tailrisk_risk::downside::DownsidePolicy;
use tailrisk_risk::portfolio::Weighting;
use tailrisk_risk::{LossAmounts, RiskReport};
use tailrisk_sim::ReturnGenerator;

use crate::cli::OutputFormat;
use crate::commands::{parse_notional, validate_days, validate_significance};
use crate::error::CliResult;
use crate::output::{format_statistic, print_header, print_json, print_output, KeyValue};

/// Arguments for the report command.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Run configuration file (TOML). Defaults to the built-in reference run.
    #[arg(short, long, env = "TAILRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the return generator
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of trading days to simulate
    #[arg(short, long)]
    pub days: Option<usize>,

    /// Significance level for VaR and CVaR (e.g. 0.05 for 5%)
    #[arg(short, long)]
    pub significance: Option<f64>,

    /// Quantile rule for VaR: linear, lower, higher, nearest, midpoint
    #[arg(long)]
    pub quantile_method: Option<QuantileMethod>,

    /// Downside deviation policy: fail, zero_when_empty
    #[arg(long)]
    pub downside_policy: Option<DownsidePolicy>,

    /// Notional for monetary loss amounts (e.g. 1000000)
    #[arg(short, long, value_parser = parse_notional)]
    pub notional: Option<Decimal>,
}

/// JSON shape of a report run.
#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    seed: u32,
    trading_days: usize,
    assets: Vec<&'a str>,
    #[serde(flatten)]
    report: &'a RiskReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    loss_amounts: Option<LossAmounts>,
}

/// Execute the report command.
pub fn execute(args: ReportArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = resolve_config(&args)?;
    let report = run(&config)?;
    let losses = config
        .notional
        .map(|notional| report.loss_amounts(notional))
        .transpose()?;

    match format {
        OutputFormat::Table if quiet => {
            print!("{}", report);
        }
        OutputFormat::Table => {
            print_header("Portfolio Risk");
            print_output(&statistic_rows(&report, losses.as_ref()), format)?;

            print_header("Run Details");
            print_output(&detail_rows(&config, &report), format)?;
        }
        OutputFormat::Json => {
            let output = ReportOutput {
                seed: config.seed,
                trading_days: config.trading_days,
                assets: config.assets.iter().map(|a| a.name.as_str()).collect(),
                report: &report,
                loss_amounts: losses,
            };
            print_json(&output)?;
        }
        OutputFormat::Csv => {
            print_output(&statistic_rows(&report, losses.as_ref()), format)?;
        }
        OutputFormat::Minimal => {
            let values: Vec<String> = report
                .metrics()
                .iter()
                .map(|(_, value)| format_statistic(*value))
                .collect();
            println!("{}", values.join(" "));
        }
    }

    Ok(())
}

/// Builds the effective configuration: file (or defaults) plus flag overrides.
pub fn resolve_config(args: &ReportArgs) -> CliResult<RunConfig> {
    let base = match &args.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };

    let overrides = RunOverrides {
        seed: args.seed,
        trading_days: args.days.map(validate_days).transpose()?,
        significance: args.significance.map(validate_significance).transpose()?,
        quantile_method: args.quantile_method,
        downside_policy: args.downside_policy,
        notional: args.notional,
    };

    Ok(base.with_overrides(&overrides)?)
}

/// Generator → aggregator → risk statistics.
pub fn run(config: &RunConfig) -> Result<RiskReport> {
    info!(
        seed = config.seed,
        assets = config.assets.len(),
        days = config.trading_days,
        "generating asset returns"
    );
    let assets =
        ReturnGenerator::from_seed(config.seed).generate(&config.assets, config.trading_days)?;

    let portfolio = config.aggregator().aggregate(&assets)?;
    debug!(observations = portfolio.len(), "aggregated portfolio returns");

    let report = config.calculator()?.report(portfolio.as_slice())?;
    info!(
        negative_returns = report.negative_returns,
        tail_size = report.tail_size,
        "computed risk statistics"
    );
    Ok(report)
}

fn statistic_rows(report: &RiskReport, losses: Option<&LossAmounts>) -> Vec<KeyValue> {
    let mut rows: Vec<KeyValue> = report
        .metrics()
        .into_iter()
        .map(|(label, value)| KeyValue::from_statistic(label, value))
        .collect();

    if let Some(losses) = losses {
        rows.push(KeyValue::new("Notional", losses.notional.to_string()));
        rows.push(KeyValue::new(
            format!("{} Loss", report.var_label()),
            losses.var.to_string(),
        ));
        rows.push(KeyValue::new(
            format!("{} Loss", report.cvar_label()),
            losses.cvar.to_string(),
        ));
    }
    rows
}

fn detail_rows(config: &RunConfig, report: &RiskReport) -> Vec<KeyValue> {
    let names: Vec<&str> = config.assets.iter().map(|a| a.name.as_str()).collect();
    let weighting = match config.weighting() {
        Weighting::Equal => "equal".to_string(),
        Weighting::Custom(weights) => weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    };

    vec![
        KeyValue::new("Seed", config.seed.to_string()),
        KeyValue::new("Trading Days", config.trading_days.to_string()),
        KeyValue::new("Assets", names.join(", ")),
        KeyValue::new("Weights", weighting),
        KeyValue::new("Quantile Method", report.quantile_method.to_string()),
        KeyValue::new("Downside Policy", config.downside_policy.to_string()),
        KeyValue::new("Observations", report.observations.to_string()),
        KeyValue::new("Negative Returns", report.negative_returns.to_string()),
        KeyValue::new("CVaR Tail Size", report.tail_size.to_string()),
    ]
}
