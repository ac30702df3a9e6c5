//! apicast CLI
//!
//! Local execution entry point. For AWS Lambda, use `apicast-lambda`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use apicast::{
    credentials::{
        API_KEY, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, CredentialSource, OPENWEATHER_API_KEY,
    },
    error::{AppError, Result},
    fetch::{self, FootballDataClient, OpenWeatherClient},
    models::{Config, SourceKind},
    pipeline,
    publish::{S3Sink, SnsNotifier},
};

/// apicast - fetch public API data and publish it to AWS
#[derive(Parser, Debug)]
#[command(
    name = "apicast",
    version,
    about = "Fetches API data and publishes it to AWS"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "apicast.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch current weather and upload it to the object store
    Weather {
        /// Override the configured city
        #[arg(long)]
        city: Option<String>,
    },

    /// Fetch match scores and publish a notification
    Scores,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("apicast starting...");

    let config = Config::load_or_default(&cli.config);

    // A failed run still exits 0; existing cron wrappers rely on it.
    if let Err(e) = run(cli, config).await {
        log::error!("Error: {}", e);
    }

    Ok(())
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Command::Weather { city } => {
            config.validate()?;

            let city = city.unwrap_or_else(|| config.weather.city.clone());
            let bucket = config
                .weather
                .bucket
                .clone()
                .ok_or_else(|| AppError::config("weather.bucket is not set"))?;

            let credentials = credential_source(&config)?
                .resolve(&[OPENWEATHER_API_KEY, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY])
                .await?;

            let http = fetch::create_client(&config.fetch)?;
            let source = OpenWeatherClient::new(
                http,
                &config.fetch.weather_base_url,
                credentials.get(OPENWEATHER_API_KEY)?,
            );
            let sink =
                S3Sink::with_credentials(&credentials, &config.credentials.region, bucket).await?;

            pipeline::run_weather(&source, &sink, &city, &config.weather.object_key).await?;
        }

        Command::Scores => {
            config.validate()?;

            let endpoint = config
                .fetch
                .scores_endpoint
                .clone()
                .ok_or_else(|| AppError::config("fetch.scores_endpoint is not set"))?;
            let topic_arn = config
                .notify
                .topic_arn
                .clone()
                .ok_or_else(|| AppError::config("notify.topic_arn is not set"))?;

            let credentials = credential_source(&config)?.resolve(&[API_KEY]).await?;

            let http = fetch::create_client(&config.fetch)?;
            let source = FootballDataClient::new(http, endpoint, credentials.get(API_KEY)?);
            let notifier = SnsNotifier::from_env(topic_arn).await;

            let message = pipeline::run_scores(&source, &notifier, &config.notify.subject).await?;
            log::debug!("Sent message:\n{}", message);
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("Configuration OK");
        }
    }

    log::info!("Done!");

    Ok(())
}

/// Build the credential source selected by configuration.
fn credential_source(config: &Config) -> Result<CredentialSource> {
    Ok(match config.credentials.source {
        SourceKind::Env => CredentialSource::Env,
        SourceKind::Dotenv => CredentialSource::DotEnv {
            path: config.credentials.dotenv_path.clone(),
        },
        SourceKind::SecretsManager => CredentialSource::SecretsManager {
            secret_name: config
                .credentials
                .secret_name
                .clone()
                .ok_or_else(|| AppError::config("credentials.secret_name is not set"))?,
            region: config.credentials.region.clone(),
        },
    })
}
