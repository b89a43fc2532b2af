use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, warn};

use trainctl_core::client::TRAIN_PATH;
use trainctl_core::config::{DEFAULT_BASE_URL, HarnessConfig, UNKNOWN_TASK_ID};
use trainctl_core::domain::{JobHandle, JobRequestSpec};
use trainctl_core::impls::{ReqwestTransport, StdinConfirmation};
use trainctl_core::ports::{Confirmation, FixedAnswer};
use trainctl_core::{HarnessBuilder, JobControlClient};

mod logging;

/// Drive a training-job control service: start, inspect and stop jobs.
///
/// Without a subcommand, runs the start/stop scenario followed by the
/// stop-of-unknown-job check.
#[derive(Debug, Parser)]
#[command(name = "trainctl", version)]
struct Cli {
    /// Base URL of the training service
    #[arg(long, env = "TRAINCTL_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Learning rate sent to /train
    #[arg(long, default_value_t = 0.001, global = true)]
    learning_rate: f64,

    /// Epochs sent to /train
    #[arg(long, default_value_t = 10, global = true)]
    epochs: u32,

    /// Optional experiment name sent to /train
    #[arg(long, global = true)]
    experiment_name: Option<String>,

    /// Seconds to wait after starting the job
    #[arg(long, default_value_t = 5.0)]
    start_wait_secs: f64,

    /// Seconds to wait after stopping the job
    #[arg(long, default_value_t = 2.0)]
    stop_wait_secs: f64,

    /// Stop the started job without asking
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no")]
    yes: bool,

    /// Leave the started job running without asking
    #[arg(long, action = ArgAction::SetTrue)]
    no: bool,

    /// Exit with a non-zero status when a scenario fails
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether the service answers on /
    Status,
    /// Start a training job and print its task id
    Start,
    /// Show the running tasks reported by the service
    Running,
    /// Stop a training job
    Stop {
        /// Task id returned by `start`
        task_id: String,
    },
    /// Submit a training request without waiting for a task id
    Submit,
}

impl Cli {
    fn job_request(&self) -> JobRequestSpec {
        let spec = JobRequestSpec::new(self.learning_rate, self.epochs);
        match &self.experiment_name {
            Some(name) => spec.with_experiment_name(name),
            None => spec,
        }
    }

    fn harness_config(&self) -> anyhow::Result<HarnessConfig> {
        Ok(HarnessConfig {
            base_url: self.base_url.clone(),
            train_request: self.job_request(),
            start_settle: Duration::try_from_secs_f64(self.start_wait_secs)
                .context("invalid --start-wait-secs")?,
            stop_settle: Duration::try_from_secs_f64(self.stop_wait_secs)
                .context("invalid --stop-wait-secs")?,
            unknown_task_id: UNKNOWN_TASK_ID.to_string(),
        })
    }

    fn confirmation(&self) -> Arc<dyn Confirmation> {
        if self.yes {
            Arc::new(FixedAnswer(true))
        } else if self.no {
            Arc::new(FixedAnswer(false))
        } else {
            Arc::new(StdinConfirmation)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // HTTP client はここで 1 回だけ作り、main を抜けるときに drop する
    let transport = Arc::new(ReqwestTransport::new().context("failed to build HTTP client")?);

    let code = match &cli.command {
        None => run_scenarios(&cli, transport).await?,
        Some(command) => {
            let client = JobControlClient::new(cli.base_url.clone(), transport);
            run_command(&client, &cli, command).await
        }
    };
    info!("program finished");
    Ok(code)
}

async fn run_scenarios(cli: &Cli, transport: Arc<ReqwestTransport>) -> anyhow::Result<ExitCode> {
    let harness = HarnessBuilder::new()
        .config(cli.harness_config()?)
        .transport(transport)
        .confirmation(cli.confirmation())
        .build()?;

    let report = harness.run().await;
    if cli.strict && !report.is_success() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_command(client: &JobControlClient, cli: &Cli, command: &Command) -> ExitCode {
    match command {
        Command::Status => {
            let status = client.check_status().await;
            info!(?status, base_url = client.base_url(), "service status");
            exit_code(status.is_up())
        }
        Command::Start => match client.start(&cli.job_request()).await {
            Ok(handle) => {
                info!(task_id = %handle, "training job started");
                println!("{handle}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                warn!(kind = ?error.kind(), %error, "failed to start training job");
                ExitCode::FAILURE
            }
        },
        Command::Running => match client.list_running().await {
            Ok(snapshot) => {
                println!("{snapshot}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                warn!(%error, "failed to list running tasks");
                ExitCode::FAILURE
            }
        },
        Command::Stop { task_id } => {
            let handle = match JobHandle::new(task_id.as_str()) {
                Ok(handle) => handle,
                Err(error) => {
                    warn!(%error, "refusing to send stop request");
                    return ExitCode::FAILURE;
                }
            };
            match client.stop(&handle).await {
                Ok(response) => {
                    info!(task_id = %handle, %response, "training job stopped");
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    warn!(task_id = %handle, kind = ?error.kind(), %error, "failed to stop training job");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Submit => {
            let spec = cli.job_request();
            info!(request = %spec.to_json_body(), url = %client.url(TRAIN_PATH), "submitting training request");
            match client.submit(&spec).await {
                Ok(response) => {
                    info!(%response, "request accepted");
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    warn!(%error, "request failed");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
