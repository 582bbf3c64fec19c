use clap::{ArgMatches, CommandFactory, FromArgMatches};

use volley::args::TesterArgs;
use volley::config::{apply_config, load_config};
use volley::error::AppResult;
use volley::http::{RunConfig, run_load};
use volley::output::print_report;
use volley::shutdown::shutdown_channel;
use volley::shutdown_handlers::setup_signal_shutdown_handler;

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;

    volley::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<(TesterArgs, ArgMatches)> {
    let matches = TesterArgs::command().get_matches();
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(mut args: TesterArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }

    let run_config = RunConfig::from_args(&args)?;
    let output_format = args.output_format;

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    tracing::info!("Making HTTP requests, please wait...");
    let result = run_load(run_config, shutdown_rx).await;

    shutdown_tx.send_replace(true);
    if let Err(err) = signal_handle.await {
        tracing::debug!("Signal handler task ended abnormally: {}", err);
    }

    let report = result?;
    print_report(&report, output_format)
}
