use clap::Parser;

/// Interactive GitHub repository search. Prompts for a keyword, shows one
/// page of matching repositories at a time and asks which page to show next.
#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Search GitHub repositories interactively. Press Ctrl-C at any prompt to quit."
)]
pub struct Args {
    /// Base URL of the GitHub REST API.
    #[clap(long, value_name = "URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// User-Agent header sent with every request. GitHub rejects requests without one.
    #[clap(long, value_name = "UA", default_value = concat!("cari/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Skip the "Searching..." animation shown before each request.
    #[clap(long)]
    pub no_animation: bool,

    /// Disable colored output.
    #[clap(long)]
    pub no_color: bool,
}
