use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use tokio::time::{sleep, Duration};

use crate::error::SearchError;
use crate::models::SearchResultItem;

const LOGO: &str = r"   ____                  _
  / ___|   __ _   _ __  (_)
 | |      / _` | | '__| | |
 | |___  | (_| | | |    | |
  \____|  \__,_| |_|    |_|
";

const ANIMATION_CYCLES: usize = 3;
const ANIMATION_DOTS: usize = 3;
const ANIMATION_STEP: Duration = Duration::from_millis(500);

/// Renders everything the user sees apart from the input prompts.
pub struct Presenter<W> {
    out: W,
    animate: bool,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, animate: bool) -> Self {
        Presenter { out, animate }
    }

    pub fn show_logo(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", LOGO.green())?;
        self.out.flush()
    }

    /// Cosmetic "Searching..." loop. It always runs its full length and is
    /// not tied to the request that follows it.
    pub async fn show_searching_animation(&self) {
        if !self.animate {
            return;
        }

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::with_template("{msg:.yellow}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        for _ in 0..ANIMATION_CYCLES {
            for dots in 1..=ANIMATION_DOTS {
                let dots = ".".repeat(dots);
                pb.set_message(format!("Searching{:<width$}", dots, width = ANIMATION_DOTS));
                pb.tick();
                sleep(ANIMATION_STEP).await;
            }
        }

        pb.finish_and_clear();
    }

    pub fn show_results(&mut self, items: &[SearchResultItem]) -> io::Result<()> {
        if items.is_empty() {
            writeln!(self.out, "{}", "\nNo matching repositories found.".red())?;
            return self.out.flush();
        }

        writeln!(self.out, "{}", "\nMatching GitHub Repositories:".green())?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.out, "{}", format!("{}. {}", index + 1, item.name).blue())?;
            writeln!(self.out, "   URL: {}", item.url)?;
            writeln!(self.out, "   Stars: {}, Forks: {}", item.stars, item.forks)?;
            writeln!(
                self.out,
                "   Description: {}\n",
                item.description.as_deref().unwrap_or("")
            )?;
        }
        self.out.flush()
    }

    pub fn show_summary(&mut self, total_count: u64, page: u32) -> io::Result<()> {
        let line = format!(
            "\nTotal repositories found: {}. Currently displaying page {}.",
            total_count, page
        );
        writeln!(self.out, "{}", line.green())?;
        self.out.flush()
    }

    pub fn show_error(&mut self, err: &SearchError) -> io::Result<()> {
        let line = if err.is_parse_error() {
            "Failed to parse response from GitHub API.".to_string()
        } else {
            format!("An error occurred: {}", err)
        };
        writeln!(self.out, "{}", line.red())?;
        self.out.flush()
    }

    pub fn show_farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "\nExiting the tool. Goodbye!".yellow())?;
        self.out.flush()
    }
}
