use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use vitalrisk_bedrock::insight::spawn_insight;
use vitalrisk_cli::config::{self, CredentialSource, VitalRiskConfig};
use vitalrisk_cli::{aws, render};
use vitalrisk_core::models::insight::Insight;
use vitalrisk_core::models::prediction::{PredictionResult, RiskStatus};
use vitalrisk_core::models::vitals::VitalsInput;
use vitalrisk_model::scorer::FeatureContribution;
use vitalrisk_model::{contributions, generate_boundary_grid, score, score_checked};

#[derive(Parser)]
#[command(name = "vitalrisk", version, about = "Vitals risk assessment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a set of vitals.
    Score {
        #[command(flatten)]
        vitals: VitalsArgs,
        /// Also request a clinical insight from the configured model.
        #[arg(long)]
        insight: bool,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Skip the form-range check and score any value as given.
        #[arg(long)]
        unchecked: bool,
    },
    /// Print the decision-boundary grid.
    Grid {
        #[arg(long)]
        json: bool,
    },
    /// Draw the decision map with the patient marked.
    Plot {
        #[command(flatten)]
        vitals: VitalsArgs,
        /// Skip the form-range check and plot any value as given.
        #[arg(long)]
        unchecked: bool,
    },
    /// Save region, model and credentials for insight requests.
    Configure {
        #[arg(long, default_value = "us-east-1")]
        region: String,
        #[arg(long)]
        model_id: Option<String>,
        /// Use a named profile from `~/.aws`.
        #[arg(long, conflicts_with = "access_key_id")]
        profile: Option<String>,
        #[arg(long, requires = "secret_access_key")]
        access_key_id: Option<String>,
        #[arg(long, requires = "access_key_id")]
        secret_access_key: Option<String>,
        #[arg(long, requires = "access_key_id")]
        session_token: Option<String>,
    },
    /// Inspect or remove the saved config.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Path,
    Delete,
}

/// Defaults are the dashboard's initial form values.
#[derive(Args, Clone, Copy)]
struct VitalsArgs {
    /// Years.
    #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
    age: f64,
    /// mmHg.
    #[arg(
        long = "systolic",
        visible_alias = "sbp",
        default_value_t = 120.0,
        allow_negative_numbers = true
    )]
    systolic_bp: f64,
    /// mmHg.
    #[arg(
        long = "diastolic",
        visible_alias = "dbp",
        default_value_t = 80.0,
        allow_negative_numbers = true
    )]
    diastolic_bp: f64,
    /// mg/dL.
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    glucose: f64,
}

impl From<VitalsArgs> for VitalsInput {
    fn from(args: VitalsArgs) -> Self {
        VitalsInput::new(args.age, args.systolic_bp, args.diastolic_bp, args.glucose)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput {
    vitals: VitalsInput,
    prediction: PredictionResult,
    status: RiskStatus,
    contributions: [FeatureContribution; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    insight: Option<Insight>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Score {
            vitals,
            insight,
            json,
            unchecked,
        } => run_score(vitals.into(), insight, json, unchecked).await,
        Commands::Grid { json } => {
            if json {
                let points: Vec<_> = generate_boundary_grid().collect();
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                print!("{}", render::render_grid_table(generate_boundary_grid()));
            }
            Ok(())
        }
        Commands::Plot { vitals, unchecked } => {
            let vitals: VitalsInput = vitals.into();
            let prediction = if unchecked {
                score(&vitals)
            } else {
                score_checked(&vitals)?
            };
            print!("{}", render::render_plot(generate_boundary_grid(), &vitals));
            println!();
            print!("{}", render::render_summary(&prediction));
            Ok(())
        }
        Commands::Configure {
            region,
            model_id,
            profile,
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            let credentials = match (profile, access_key_id, secret_access_key) {
                (Some(profile_name), _, _) => CredentialSource::Profile { profile_name },
                (None, Some(access_key_id), Some(secret_access_key)) => CredentialSource::Inline {
                    access_key_id,
                    secret_access_key,
                    session_token,
                },
                _ => CredentialSource::DefaultChain,
            };
            let fallback = VitalRiskConfig::fallback();
            let config = VitalRiskConfig {
                region,
                model_id: model_id.unwrap_or(fallback.model_id),
                credentials,
                ..fallback
            };
            let path = config::save_config(&config)?;
            println!("Saved {}", path.display());
            Ok(())
        }
        Commands::Config { action } => run_config(action),
    }
}

async fn run_score(
    vitals: VitalsInput,
    want_insight: bool,
    json: bool,
    unchecked: bool,
) -> Result<()> {
    let prediction = if unchecked {
        score(&vitals)
    } else {
        score_checked(&vitals)?
    };
    let terms = contributions(&vitals);

    // Start the insight request before printing so it overlaps with output.
    let pending = if want_insight {
        aws::prepare_insight_client()
            .await
            .map(|client| spawn_insight(Arc::new(client), vitals, prediction))
    } else {
        None
    };

    if !json {
        print!("{}", render::render_summary(&prediction));
        println!();
        print!("{}", render::render_contributions(&terms));
    }

    let insight = match pending {
        Some(handle) => handle.await?.map(|transaction| transaction.insight),
        None => None,
    };

    if json {
        let output = ScoreOutput {
            vitals,
            prediction,
            status: prediction.status(),
            contributions: terms,
            insight,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match insight {
        Some(insight) => {
            println!();
            print!("{}", render::render_insight(&insight));
        }
        None if want_insight => println!("\nClinical insight unavailable."),
        None => {}
    }

    Ok(())
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let cfg = config::load_or_default()?;
            let info = config::config_info(&cfg);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        ConfigAction::Path => println!("{}", config::config_path()?.display()),
        ConfigAction::Delete => {
            if config::delete_config()? {
                println!("Config deleted");
            } else {
                println!("No config to delete");
            }
        }
    }
    Ok(())
}
