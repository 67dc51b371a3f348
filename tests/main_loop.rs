mod common;

use cari_lib::{shutdown, App, ExitReason, GitHubSearcher, InputController, Presenter};
use common::{CannedResponse, MockGitHub, NO_RESULTS, RAFT_PAGE_ONE, RAFT_PAGE_TWO};

struct Transcript {
    reason: ExitReason,
    prompts: String,
    screen: String,
}

async fn run_session(server: &MockGitHub, keyboard: &str) -> Transcript {
    let (_trigger, shutdown) = shutdown::channel();
    let mut prompts = Vec::new();
    let mut screen = Vec::new();

    let reason = App::new(
        GitHubSearcher::with_api_url(&server.url, "cari-test").unwrap(),
        InputController::new(keyboard.as_bytes(), &mut prompts),
        Presenter::new(&mut screen, false),
        shutdown,
    )
    .run()
    .await
    .unwrap();

    Transcript {
        reason,
        prompts: String::from_utf8(prompts).unwrap(),
        screen: String::from_utf8(screen).unwrap(),
    }
}

#[tokio::test]
async fn more_results_prompt_for_next_page() {
    let server = MockGitHub::start(vec![CannedResponse::ok(RAFT_PAGE_ONE)]).await;

    let session = run_session(&server, "raft\n\n").await;

    assert_eq!(session.reason, ExitReason::EndOfInput);
    assert!(session.screen.contains("1. raft-go"));
    assert!(session.screen.contains("Stars: 10, Forks: 2"));
    assert!(session
        .screen
        .contains("Total repositories found: 45. Currently displaying page 1."));
    assert_eq!(session.prompts.matches("Enter page number").count(), 1);
    // Blank page input goes back to the keyword prompt.
    assert_eq!(session.prompts.matches("Enter a keyword").count(), 2);
}

#[tokio::test]
async fn chosen_page_is_fetched_next() {
    let server = MockGitHub::start(vec![
        CannedResponse::ok(RAFT_PAGE_ONE),
        CannedResponse::ok(RAFT_PAGE_TWO),
    ])
    .await;

    let session = run_session(&server, "raft\n2\n").await;

    assert_eq!(
        server.requests(),
        [
            "GET /search/repositories?q=raft&page=1 HTTP/1.1",
            "GET /search/repositories?q=raft&page=2 HTTP/1.1",
        ]
    );
    assert!(session.screen.contains("1. raft-rs"));
    // 45 results fit in two pages, so page 2 ends the pagination.
    assert_eq!(session.prompts.matches("Enter page number").count(), 1);
    assert_eq!(session.screen.matches("Total repositories found").count(), 1);
}

#[tokio::test]
async fn empty_results_skip_pagination() {
    let server = MockGitHub::start(vec![CannedResponse::ok(NO_RESULTS)]).await;

    let session = run_session(&server, "zzzz-nothing\n").await;

    assert!(session.screen.contains("No matching repositories found."));
    assert!(!session.prompts.contains("Enter page number"));
    assert_eq!(session.prompts.matches("Enter a keyword").count(), 2);
}

#[tokio::test]
async fn malformed_body_behaves_like_no_results() {
    let server = MockGitHub::start(vec![CannedResponse::ok("not json")]).await;

    let session = run_session(&server, "raft\n").await;

    assert!(session.screen.contains("Failed to parse response from GitHub API."));
    assert!(session.screen.contains("No matching repositories found."));
    assert!(!session.prompts.contains("Enter page number"));
    assert!(session.screen.contains("Exiting the tool. Goodbye!"));
}

#[tokio::test]
async fn new_keyword_restarts_at_page_one() {
    let server = MockGitHub::start(vec![
        CannedResponse::ok(RAFT_PAGE_ONE),
        CannedResponse::ok(RAFT_PAGE_TWO),
        CannedResponse::ok(NO_RESULTS),
    ])
    .await;

    run_session(&server, "raft\n2\npaxos\n").await;

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2], "GET /search/repositories?q=paxos&page=1 HTTP/1.1");
}
