use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use mastodon_homefeed::cli::{Args, Mode};
use mastodon_homefeed::{logging, run_generate, run_setup, Config, HomefeedError, MastodonClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        logging::init_console_only(&config.logging.level);
    }

    match run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ HomefeedError::Instance(_)) => {
            println!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, config: &Config) -> mastodon_homefeed::Result<()> {
    let client = MastodonClient::new(&args.instance, &config.http)?;

    match args.mode() {
        Mode::Setup => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            run_setup(&client, &config.app, &mut input, &mut output).await?;
        }
        Mode::Generate { token } => {
            let output_file = args.output_path(&config.feed.output_file);
            let count = run_generate(
                &client,
                &args.instance,
                &token,
                &config.feed,
                &output_file,
            )
            .await?;
            info!("generated {} entries for {}", count, args.instance);
        }
    }

    Ok(())
}
