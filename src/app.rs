use std::future::Future;
use std::io::{self, Write};
use tokio::io::AsyncBufRead;
use tracing::{debug, info};

use crate::github_searcher::GitHubSearcher;
use crate::input::InputController;
use crate::models::PaginationState;
use crate::presenter::Presenter;
use crate::shutdown::Shutdown;

/// Why the main loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Interrupted,
    EndOfInput,
}

/// The interactive loop: ask for a keyword, then page through its results
/// until the user stops or nothing is left.
pub struct App<R, I, O> {
    searcher: GitHubSearcher,
    input: InputController<R, I>,
    presenter: Presenter<O>,
    shutdown: Shutdown,
}

impl<R, I, O> App<R, I, O>
where
    R: AsyncBufRead + Unpin,
    I: Write,
    O: Write,
{
    pub fn new(
        searcher: GitHubSearcher,
        input: InputController<R, I>,
        presenter: Presenter<O>,
        shutdown: Shutdown,
    ) -> Self {
        App {
            searcher,
            input,
            presenter,
            shutdown,
        }
    }

    /// Run until interrupted or stdin closes, then print the farewell.
    pub async fn run(&mut self) -> io::Result<ExitReason> {
        let reason = self.run_loop().await?;
        info!("Leaving main loop: {:?}", reason);
        self.presenter.show_farewell()?;
        Ok(reason)
    }

    async fn run_loop(&mut self) -> io::Result<ExitReason> {
        loop {
            let read = prompt(&mut self.shutdown, self.input.read_keyword()).await?;
            let keyword = match read {
                Prompted::Exit(reason) => return Ok(reason),
                Prompted::Answer(None) => continue,
                Prompted::Answer(Some(keyword)) => keyword,
            };

            let mut state = PaginationState::new(keyword);
            loop {
                let animation = self.presenter.show_searching_animation();
                if until_shutdown(&mut self.shutdown, animation).await.is_none() {
                    return Ok(ExitReason::Interrupted);
                }

                let fetch = self
                    .searcher
                    .fetch(&state.keyword, state.page, &mut self.presenter);
                let response = match until_shutdown(&mut self.shutdown, fetch).await {
                    None => return Ok(ExitReason::Interrupted),
                    Some(response) => response?,
                };

                self.presenter.show_results(&response.items)?;
                if !state.has_more(response.total_count) {
                    debug!("No further pages for '{}'", state.keyword);
                    break;
                }
                self.presenter.show_summary(response.total_count, state.page)?;

                let read = prompt(&mut self.shutdown, self.input.read_page()).await?;
                match read {
                    Prompted::Exit(reason) => return Ok(reason),
                    Prompted::Answer(None) => break,
                    Prompted::Answer(Some(page)) => state.go_to(page),
                }
            }
        }
    }
}

/// Drive `fut` to completion unless shutdown fires first.
async fn until_shutdown<F: Future>(shutdown: &mut Shutdown, fut: F) -> Option<F::Output> {
    tokio::select! {
        biased;
        _ = shutdown.triggered() => {
            info!("Interrupt received");
            None
        }
        output = fut => Some(output),
    }
}

enum Prompted<T> {
    Answer(T),
    Exit(ExitReason),
}

/// Wait for a prompt's answer. Interrupts and a closed stdin both end the loop.
async fn prompt<F, T>(shutdown: &mut Shutdown, read: F) -> io::Result<Prompted<T>>
where
    F: Future<Output = io::Result<T>>,
{
    match until_shutdown(shutdown, read).await {
        None => Ok(Prompted::Exit(ExitReason::Interrupted)),
        Some(Ok(answer)) => Ok(Prompted::Answer(answer)),
        Some(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Ok(Prompted::Exit(ExitReason::EndOfInput))
        }
        Some(Err(e)) => Err(e),
    }
}
