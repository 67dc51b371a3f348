use cari_lib::{logging, shutdown, App, Args, GitHubSearcher, InputController, Presenter};
use clap::Parser;
use dotenv::dotenv;
use std::error::Error;
use std::io;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();

    let args = Args::parse();
    logging::init(args.no_color);
    if args.no_color {
        colored::control::set_override(false);
    }

    let (trigger, shutdown) = shutdown::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => trigger.trigger(),
            Err(e) => error!("Unable to listen for Ctrl-C: {}", e),
        }
    });

    let searcher = GitHubSearcher::new(&args)?;
    let mut presenter = Presenter::new(io::stdout(), !args.no_animation);
    presenter.show_logo()?;

    let input = InputController::new(BufReader::new(tokio::io::stdin()), io::stdout());
    let reason = App::new(searcher, input, presenter, shutdown).run().await?;
    info!("Exiting after {:?}", reason);

    // A pending stdin read would otherwise keep the runtime alive.
    std::process::exit(0);
}
