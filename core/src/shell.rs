//! Presentation state for the lookup screen.
//!
//! # Design
//! `Shell` is a plain state machine: it never performs I/O or spawns tasks.
//! `submit` hands back a `Submission` describing the lookup to run, and the
//! host reports the outcome through `complete` (or gives up through
//! `abandon`). Each submission carries a `Ticket`; only the most recent
//! ticket is live, so a host that starts a new search before the previous
//! one finished can never have the stale result overwrite the newer one.
//!
//! Failures are kept in the phase instead of collapsing back to idle, which
//! gives a front end an explicit place to show the error while the record
//! from before the search stays on screen.

use tracing::{info, warn};

use crate::error::LookupError;
use crate::types::UserProfile;
use crate::view::View;

/// Identifies one submitted lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A lookup the host should run on behalf of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub username: String,
}

/// Where the screen is in its search cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet.
    Idle,
    /// A lookup is in flight. `previous` is what was on screen before it.
    Loading { previous: Option<UserProfile> },
    /// The last lookup succeeded.
    Success(UserProfile),
    /// The last lookup failed; `previous` is still displayed.
    Failure {
        error: LookupError,
        previous: Option<UserProfile>,
    },
}

impl Phase {
    /// The record currently displayed, if any.
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Phase::Idle => None,
            Phase::Success(profile) => Some(profile),
            Phase::Loading { previous } | Phase::Failure { previous, .. } => previous.as_ref(),
        }
    }
}

#[derive(Debug)]
pub struct Shell {
    input: String,
    phase: Phase,
    pending: Option<Ticket>,
    next_ticket: u64,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            phase: Phase::Idle,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Start a lookup for the current input.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty. Otherwise any pending lookup becomes stale.
    pub fn submit(&mut self) -> Option<Submission> {
        let username = self.input.trim();
        if username.is_empty() {
            return None;
        }
        let username = username.to_string();

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        if let Some(stale) = self.pending.replace(ticket) {
            info!(?stale, ?ticket, "superseding pending lookup");
        }

        let previous = self.phase.profile().cloned();
        self.phase = Phase::Loading { previous };
        Some(Submission { ticket, username })
    }

    /// Apply the outcome of a lookup. Returns `false` if `ticket` is stale.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<UserProfile, LookupError>) -> bool {
        if !self.take_pending(ticket) {
            return false;
        }
        self.phase = match outcome {
            Ok(profile) => {
                info!(login = %profile.login, "profile loaded");
                Phase::Success(profile)
            }
            Err(error) => {
                warn!(%error, "profile lookup failed");
                Phase::Failure {
                    error,
                    previous: self.phase.profile().cloned(),
                }
            }
        };
        true
    }

    /// Drop a lookup without a result and restore what was on screen.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if !self.take_pending(ticket) {
            return false;
        }
        self.phase = match self.phase.profile().cloned() {
            Some(profile) => Phase::Success(profile),
            None => Phase::Idle,
        };
        true
    }

    pub fn view(&self) -> View {
        View::from_phase(&self.phase)
    }

    fn take_pending(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(login: &str) -> UserProfile {
        UserProfile {
            login: login.to_string(),
            avatar_url: format!("https://example.com/{login}.png"),
            name: None,
            bio: Some(format!("{login} bio")),
        }
    }

    fn not_found() -> LookupError {
        LookupError::InvalidResponse {
            status: 404,
            body: String::new(),
        }
    }

    fn submit(shell: &mut Shell, text: &str) -> Submission {
        shell.set_input(text);
        shell.submit().expect("non-empty input should submit")
    }

    #[test]
    fn starts_idle() {
        let shell = Shell::new();
        assert_eq!(shell.phase(), &Phase::Idle);
        assert!(!shell.is_loading());
        assert!(shell.phase().profile().is_none());
    }

    #[test]
    fn empty_input_does_not_submit() {
        let mut shell = Shell::new();
        for text in ["", "   ", "\t\n"] {
            shell.set_input(text);
            assert!(shell.submit().is_none());
        }
        assert_eq!(shell.phase(), &Phase::Idle);
        assert!(!shell.is_loading());
    }

    #[test]
    fn submit_trims_input() {
        let mut shell = Shell::new();
        let submission = submit(&mut shell, "  octocat \n");
        assert_eq!(submission.username, "octocat");
        assert_eq!(shell.input(), "  octocat \n");
    }

    #[test]
    fn loading_spans_submit_to_success() {
        let mut shell = Shell::new();
        let submission = submit(&mut shell, "octocat");
        assert!(shell.is_loading());

        assert!(shell.complete(submission.ticket, Ok(profile("octocat"))));
        assert!(!shell.is_loading());
        assert_eq!(shell.phase(), &Phase::Success(profile("octocat")));
    }

    #[test]
    fn loading_spans_submit_to_failure() {
        let mut shell = Shell::new();
        let submission = submit(&mut shell, "ghost");
        assert!(shell.is_loading());

        assert!(shell.complete(submission.ticket, Err(not_found())));
        assert!(!shell.is_loading());
        assert!(matches!(shell.phase(), Phase::Failure { previous: None, .. }));
    }

    #[test]
    fn failure_keeps_previous_record() {
        let mut shell = Shell::new();
        let first = submit(&mut shell, "octocat");
        shell.complete(first.ticket, Ok(profile("octocat")));

        let second = submit(&mut shell, "ghost");
        assert_eq!(shell.phase().profile(), Some(&profile("octocat")));
        shell.complete(second.ticket, Err(not_found()));

        match shell.phase() {
            Phase::Failure { error, previous } => {
                assert_eq!(error, &not_found());
                assert_eq!(previous.as_ref(), Some(&profile("octocat")));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn success_replaces_record_wholesale() {
        let mut shell = Shell::new();
        let first = submit(&mut shell, "octocat");
        shell.complete(first.ticket, Ok(profile("octocat")));
        let second = submit(&mut shell, "mona");
        shell.complete(second.ticket, Ok(profile("mona")));
        assert_eq!(shell.phase().profile(), Some(&profile("mona")));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut shell = Shell::new();
        let first = submit(&mut shell, "octocat");
        let second = submit(&mut shell, "mona");
        assert_ne!(first.ticket, second.ticket);

        assert!(!shell.complete(first.ticket, Ok(profile("octocat"))));
        assert!(shell.is_loading());

        assert!(shell.complete(second.ticket, Ok(profile("mona"))));
        assert_eq!(shell.phase(), &Phase::Success(profile("mona")));
    }

    #[test]
    fn completing_twice_is_ignored() {
        let mut shell = Shell::new();
        let submission = submit(&mut shell, "octocat");
        assert!(shell.complete(submission.ticket, Ok(profile("octocat"))));
        assert!(!shell.complete(submission.ticket, Err(not_found())));
        assert_eq!(shell.phase(), &Phase::Success(profile("octocat")));
    }

    #[test]
    fn abandon_restores_previous_display() {
        let mut shell = Shell::new();
        let submission = submit(&mut shell, "octocat");
        assert!(shell.abandon(submission.ticket));
        assert_eq!(shell.phase(), &Phase::Idle);

        let first = submit(&mut shell, "octocat");
        shell.complete(first.ticket, Ok(profile("octocat")));
        let second = submit(&mut shell, "mona");
        assert!(shell.abandon(second.ticket));
        assert_eq!(shell.phase(), &Phase::Success(profile("octocat")));
    }
}
