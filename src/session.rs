//! Runs the fetch → render pipeline as a background task, one lookup at a time.
//!
//! A [`Session`] is what a UI drives. Each button press becomes a
//! [`Session::submit`] call, and the returned [`PendingLookup`] resolves to the
//! text to show. While a lookup is pending, further submissions are refused.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::profile::fetch_profile;
use crate::report::{Presenter, ProfileCard};
use crate::{TtClient, TtError};

/// Text to show while a lookup is pending.
pub const LOADING_TEXT: &str = "Loading...";

/// Text shown for any failure to retrieve or parse the page.
pub const FETCH_FAILED_TEXT: &str = "Could not retrieve data. Check username or network.";

/// Final state of one lookup.
///
/// The variants keep the tagged error, but `Display` renders the coarse
/// message a user sees, matching the three-tier failure text.
#[derive(Debug)]
pub enum LookupOutcome {
    Report(ProfileCard),
    /// The page could not be fetched, located, or parsed.
    FetchFailed(TtError),
    /// The page parsed but a required field was missing.
    RenderFailed(TtError),
    /// The task ended without producing a result (panic or cancellation).
    Aborted(String),
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Report(_))
    }

    pub fn card(&self) -> Option<&ProfileCard> {
        match self {
            LookupOutcome::Report(card) => Some(card),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TtError> {
        match self {
            LookupOutcome::FetchFailed(e) | LookupOutcome::RenderFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Report(card) => write!(f, "{card}"),
            LookupOutcome::FetchFailed(_) => f.write_str(FETCH_FAILED_TEXT),
            LookupOutcome::RenderFailed(e) => write!(
                f,
                "Error processing data: {e}.  Likely invalid username or data format."
            ),
            LookupOutcome::Aborted(msg) => write!(f, "An error occurred: {msg}"),
        }
    }
}

/// Fetches `username` and renders it. The two network calls run strictly in sequence.
pub async fn run_lookup(
    client: &TtClient,
    presenter: &Presenter,
    username: &str,
    save_avatar: bool,
) -> LookupOutcome {
    let snapshot = match fetch_profile(client, username).await {
        Ok(s) => s,
        Err(e) => return LookupOutcome::FetchFailed(e),
    };
    match presenter.render(&snapshot, save_avatar).await {
        Ok(card) => LookupOutcome::Report(card),
        Err(e) => LookupOutcome::RenderFailed(e),
    }
}

/// A submitted lookup. Await [`PendingLookup::wait`] for the outcome.
#[derive(Debug)]
pub struct PendingLookup {
    handle: JoinHandle<LookupOutcome>,
}

impl PendingLookup {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> LookupOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "lookup task failed");
                LookupOutcome::Aborted(e.to_string())
            }
        }
    }
}

/// Single-in-flight lookup scheduler.
#[derive(Debug, Clone)]
pub struct Session {
    client: TtClient,
    presenter: Presenter,
    in_flight: Arc<Semaphore>,
}

impl Session {
    pub fn new(client: TtClient, presenter: Presenter) -> Self {
        Self {
            client,
            presenter,
            in_flight: Arc::new(Semaphore::new(1)),
        }
    }

    /// Whether a lookup is currently pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight.available_permits() == 0
    }

    /// Schedules a lookup on the current tokio runtime.
    ///
    /// The slot is released when the lookup finishes, before
    /// [`PendingLookup::wait`] returns.
    ///
    /// # Errors
    ///
    /// - [`TtError::NoRuntime`] if called outside a tokio runtime.
    /// - [`TtError::Busy`] if another lookup from this session is still pending.
    pub fn submit(
        &self,
        username: impl Into<String>,
        save_avatar: bool,
    ) -> Result<PendingLookup, TtError> {
        let runtime = Handle::try_current().map_err(|_| TtError::NoRuntime)?;
        let permit = self
            .in_flight
            .clone()
            .try_acquire_owned()
            .map_err(|_| TtError::Busy)?;

        let client = self.client.clone();
        let presenter = self.presenter.clone();
        let username = username.into();
        tracing::debug!(%username, save_avatar, "lookup submitted");

        let handle = runtime.spawn(async move {
            let _permit = permit;
            run_lookup(&client, &presenter, &username, save_avatar).await
        });
        Ok(PendingLookup { handle })
    }
}
