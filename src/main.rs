mod cli;

use cardiorisk::engine::{self, rules};
use cardiorisk::error::CardioError;
use cardiorisk::types::config::CardioConfig;
use cardiorisk::{config, intake, remote, report};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const ELEVATED_RISK: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_format(
    requested: Option<cli::ReportFormat>,
    cfg: &CardioConfig,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match cfg.report_format() {
            Some("json") => report::OutputFormat::Json,
            _ => report::OutputFormat::Md,
        },
    }
}

fn run(cli: cli::Cli) -> Result<i32, CardioError> {
    tracing::info!("cardiorisk v{}", env!("CARGO_PKG_VERSION"));
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    if loaded.is_none() {
        tracing::debug!(dir = %cwd.display(), "no cardiorisk.toml found, using defaults");
    }
    let cfg = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let profile = intake::load_profile(
                &cmd.profile,
                cmd.enforce_form_ranges || cfg.enforce_form_ranges(),
            )?;
            let local = engine::score(&profile)?;
            tracing::info!(score = local.risk_score, "local assessment complete");

            let assessment = match &cmd.remote_response {
                Some(path) => {
                    let merged = remote::load_response(path).and_then(|response| {
                        remote::merge(local.clone(), &response, cfg.remote_model_label())
                    });
                    match merged {
                        Ok(merged) => merged,
                        Err(e) if cmd.strict_remote => return Err(e),
                        Err(e) => {
                            tracing::warn!(
                                error = %e,
                                "remote prediction unusable, using local estimate"
                            );
                            local
                        }
                    }
                }
                None => local,
            };

            let band = cfg.band_thresholds().classify(assessment.risk_score);
            let rendered = report::render(
                &report::AssessmentReport {
                    assessment: &assessment,
                    band,
                    ruleset_version: rules::CANONICAL.version,
                    bmi: profile.display_bmi(),
                },
                resolve_format(cmd.format, &cfg),
            )?;
            println!("{rendered}");

            if band.is_elevated() {
                Ok(exit_code::ELEVATED_RISK)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Payload(cmd) => {
            let profile = intake::load_profile(
                &cmd.profile,
                cmd.enforce_form_ranges || cfg.enforce_form_ranges(),
            )?;
            profile.validate()?;
            let payload = remote::PatientPayload::from_profile(&profile);
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rules => {
            print!("{}", report::md::rules_to_markdown(&rules::CANONICAL));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                CardioError::InvalidInput(_) => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
