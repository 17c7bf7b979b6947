use anyhow::{Context as _, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use crew_task_client::config::DEFAULT_BASE_URL;
use crew_task_client::view;
use crew_task_client::{
    ClientConfig, HttpEndpoint, Submission, SubmissionController, TaskEndpoint,
};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "crew-task-client", about = "Send prompts to the agent crew service")]
struct Cli {
    /// Base URL of the task-processing service
    #[arg(long, env = "CREW_CLIENT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log filter, e.g. `warn` or `crew_task_client=debug`
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a single prompt and print the outcome
    Ask { prompt: Vec<String> },
    /// Check that the service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = ClientConfig::new().with_base_url(&cli.base_url);
    let endpoint = HttpEndpoint::new(&config);

    match cli.command {
        Some(Command::Health) => {
            let health = endpoint.health().await.context("health check")?;
            let service = health.service.as_deref().unwrap_or("unknown service");
            if health.is_healthy() {
                println!("{} {}", "healthy".green().bold(), service);
            } else {
                println!("{} {}", health.status.yellow().bold(), service);
            }
        }
        Some(Command::Ask { prompt }) => {
            let mut controller = SubmissionController::with_config(endpoint, config);
            controller.update_input(prompt.join(" "));
            if let Submission::Skipped(reason) = controller.submit().await {
                return Err(anyhow!("nothing submitted: {reason}"));
            }
            print!("{}", view::render(controller.session()));
        }
        None => interactive(SubmissionController::with_config(endpoint, config)).await?,
    }

    Ok(())
}

async fn interactive(mut controller: SubmissionController<HttpEndpoint>) -> Result<()> {
    println!("{}", "Enter a topic, question, or task for the agents (Ctrl-D to quit).".bold());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush().context("flush stdout")?;

        let Some(line) = lines.next_line().await.context("read stdin")? else {
            break;
        };

        controller.update_input(line);
        let Ok(pending) = controller.begin() else {
            continue;
        };

        println!("{}", view::submit_label(controller.session()).dimmed());
        print!("{}", view::render(controller.session()));

        let outcome = controller.endpoint().process(pending.prompt()).await;
        controller.settle(pending, outcome);
        print!("{}", view::render(controller.session()));
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
