//! Calculate command - cost estimate for one submission.

use anyhow::Result;
use clap::Args;
use eecalc_core::{ClientError, CostEstimate, EstimateError, WeatherSource, estimate};
use eecalc_fetch::WeatherClient;
use eecalc_store::{CredentialStore, ReferenceData, SettingsStore};
use tracing::{info, warn};

use crate::ExitCode;
use crate::output::ReportFormatter;

/// Printed when no API key is stored.
pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "Credentials missing, please use set-api-key command";

/// Arguments for the calculate command.
#[derive(Args)]
pub struct CalculateArgs {
    /// Submission id of the building to estimate.
    pub submission_id: String,
}

/// What the calculate command ends up printing.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculateOutput {
    /// Full cost report.
    Report(String),
    /// Partial report for an unknown design region.
    Degraded(String),
    /// No package covers the power heat loss.
    NoRecommendation,
    /// The submission id is not in the dataset.
    SubmissionNotFound,
    /// No API key is stored.
    MissingCredentials,
    /// The weather lookup failed.
    Failed(ClientError),
}

impl CalculateOutput {
    /// Text for the user.
    pub fn message(&self) -> String {
        match self {
            Self::Report(text) | Self::Degraded(text) => text.clone(),
            Self::NoRecommendation => "No recommended heat pump found".to_string(),
            Self::SubmissionNotFound => "Submission not found".to_string(),
            Self::MissingCredentials => MISSING_CREDENTIALS_MESSAGE.to_string(),
            Self::Failed(err) => format!("An unexpected error occurred: {err}"),
        }
    }

    /// Process exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Report(_) | Self::Degraded(_) | Self::NoRecommendation => ExitCode::Success,
            Self::SubmissionNotFound => ExitCode::SubmissionNotFound,
            Self::MissingCredentials | Self::Failed(_) => ExitCode::Error,
        }
    }

    /// Whether the message belongs on stderr.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Runs the calculate command.
pub async fn run(args: &CalculateArgs) -> Result<ExitCode> {
    let settings = SettingsStore::load_default().await?;
    let data = ReferenceData::load(settings.get()).await?;

    let api_key = match CredentialStore::system().api_key().await {
        Ok(key) => key,
        Err(e) => {
            warn!(error = %e, "Could not read API key from keychain");
            None
        }
    };

    let client = WeatherClient::new(settings.get().weather_client_config(api_key))?;
    let output = calculate(&data, &args.submission_id, &client).await;

    if output.is_error() {
        eprintln!("{}", output.message());
    } else {
        println!("{}", output.message());
    }

    Ok(output.exit_code())
}

/// Runs the estimate for one submission and decides what to print.
pub async fn calculate<W: WeatherSource>(
    data: &ReferenceData,
    submission_id: &str,
    weather: &W,
) -> CalculateOutput {
    let Some(building) = data.building(submission_id) else {
        info!(submission = %submission_id, "Submission not found");
        return CalculateOutput::SubmissionNotFound;
    };

    let formatter = ReportFormatter::new();

    match estimate(building, &data.heat_pumps, weather).await {
        Ok(CostEstimate {
            heat_loss,
            power_heat_loss,
            recommended: Some(package),
            total_cost: Some(total_cost),
        }) => CalculateOutput::Report(formatter.render_report(
            building,
            heat_loss,
            power_heat_loss,
            &package,
            total_cost,
        )),
        Ok(_) => CalculateOutput::NoRecommendation,
        Err(EstimateError { heat_loss, source }) => match source {
            ClientError::MissingCredentials => CalculateOutput::MissingCredentials,
            ClientError::NotFound => {
                CalculateOutput::Degraded(formatter.render_degraded_report(building, heat_loss))
            }
            ClientError::Generic => CalculateOutput::Failed(source),
        },
    }
}
