//! Drives a `Shell` with real asynchronous lookups.
//!
//! # Design
//! At most one lookup is live per session. Starting a search cancels the one
//! in flight through its `CancellationToken` and supersedes its ticket in the
//! `Shell`, so a result that slips past the cancellation is still discarded.
//! The shell lock is never held while a request is outstanding.

use std::sync::Arc;

use profile_core::{Phase, ProfileClient, Shell, Submission, Ticket, View};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::lookup::fetch_user_profile;
use crate::transport::Transport;

#[derive(Clone)]
pub struct Session {
    client: ProfileClient,
    transport: Arc<dyn Transport>,
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    shell: Shell,
    in_flight: Option<InFlight>,
}

struct InFlight {
    ticket: Ticket,
    cancel: CancellationToken,
}

impl Session {
    pub fn new(client: ProfileClient, transport: Arc<dyn Transport>) -> Self {
        Self {
            client,
            transport,
            inner: Arc::new(Mutex::new(Inner {
                shell: Shell::new(),
                in_flight: None,
            })),
        }
    }

    /// Set the input to `username` and start a lookup for it.
    ///
    /// Returns `None` when the trimmed username is empty; nothing is sent and
    /// an in-flight lookup keeps running. Otherwise the returned handle
    /// resolves to whether this lookup's result reached the screen.
    pub async fn search(&self, username: &str) -> Option<JoinHandle<bool>> {
        let mut inner = self.inner.lock().await;
        inner.shell.set_input(username);
        let submission = inner.shell.submit()?;

        if let Some(previous) = inner.in_flight.take() {
            debug!(ticket = ?previous.ticket, "cancelling superseded lookup");
            previous.cancel.cancel();
        }
        let cancel = CancellationToken::new();
        inner.in_flight = Some(InFlight {
            ticket: submission.ticket,
            cancel: cancel.clone(),
        });
        drop(inner);

        let session = self.clone();
        Some(tokio::spawn(session.run(submission, cancel)))
    }

    /// Abandon the in-flight lookup, if any, and restore the prior display.
    pub async fn cancel(&self) -> bool {
        let mut inner = self.inner.lock().await;
        let Some(in_flight) = inner.in_flight.take() else {
            return false;
        };
        in_flight.cancel.cancel();
        inner.shell.abandon(in_flight.ticket)
    }

    pub async fn view(&self) -> View {
        self.inner.lock().await.shell.view()
    }

    pub async fn phase(&self) -> Phase {
        self.inner.lock().await.shell.phase().clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.shell.is_loading()
    }

    async fn run(self, submission: Submission, cancel: CancellationToken) -> bool {
        let Submission { ticket, username } = submission;
        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                debug!(?ticket, %username, "lookup cancelled");
                return false;
            }
            outcome = fetch_user_profile(self.transport.as_ref(), &self.client, &username) => outcome,
        };

        let mut inner = self.inner.lock().await;
        if inner.in_flight.as_ref().is_some_and(|f| f.ticket == ticket) {
            inner.in_flight = None;
        }
        inner.shell.complete(ticket, outcome)
    }
}
