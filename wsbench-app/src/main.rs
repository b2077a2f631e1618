mod cli;
mod shutdown;

use clap::Parser;
use cli::{Cli, ConsumerArgs, ProducerArgs, Role};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wsbench::run::{CancelSignal, RunController};
use wsbench_tokio_consumer::ConsumerClient;
use wsbench_tokio_producer::ProducerServer;

type AppError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_line_number(true)
        .init();

    let cancel = CancelSignal::new();
    tokio::spawn(shutdown::cancel_on_shutdown(cancel.clone()));

    let result = match cli.role {
        Role::Producer(args) => run_producer(args, cancel).await,
        Role::Consumer(args) => run_consumer(args, cancel).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Benchmark aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run_producer(args: ProducerArgs, cancel: CancelSignal) -> Result<(), AppError> {
    let mut server = ProducerServer::new(args.pipeline_config()?)?.with_cancel_signal(cancel);
    if args.unbounded {
        server = server.unbounded();
    }

    server.serve_on(&args.host, args.port).await?;
    Ok(())
}

async fn run_consumer(args: ConsumerArgs, cancel: CancelSignal) -> Result<(), AppError> {
    let controller = RunController::new(args.pipeline_config()?)?.with_cancel_signal(cancel);

    let client = ConsumerClient::connect(&args.host, args.port).await?;
    let report = client.run(&controller).await?;

    println!("{report}");
    Ok(())
}
