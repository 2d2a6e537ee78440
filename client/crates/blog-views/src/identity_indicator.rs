use crate::{IdentityState, LifetimeGuard, Navigator, Route};

use blog_api::ApiClient;
use blog_session::{AuthChange, Session, SessionResult};

use futures::future::BoxFuture;
use log::{debug, info, warn};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;

type Resolution = BoxFuture<'static, IdentityState>;

/// Header widget showing who is signed in.
///
/// Its state only depends on whether a credential exists: it resolves the
/// identity once per credential change and never asks the backend when there
/// is no credential.
pub struct IdentityIndicator {
    api: ApiClient,
    session: Session,
    changes: broadcast::Receiver<AuthChange>,
    state: watch::Sender<IdentityState>,
}

impl IdentityIndicator {
    /// Subscribes to session changes immediately, so changes made between
    /// construction and [`run`](Self::run) are not missed.
    pub fn new(api: ApiClient, session: Session) -> Self {
        let changes = session.subscribe();
        let (state, _) = watch::channel(IdentityState::NoCredential);

        Self {
            api,
            session,
            changes,
            state,
        }
    }

    pub fn state(&self) -> IdentityState {
        self.state.borrow().clone()
    }

    /// Observe state transitions, e.g. from another task while `run` is going.
    pub fn subscribe_state(&self) -> watch::Receiver<IdentityState> {
        self.state.subscribe()
    }

    pub fn render(&self) -> String {
        self.state.borrow().render()
    }

    /// Resolve the identity for whatever credential is stored right now.
    pub async fn mount(&mut self) {
        self.reconcile().await;
    }

    /// React to one change notification. Storage changes to unrelated keys
    /// are ignored.
    pub async fn handle_change(&mut self, change: &AuthChange) {
        if !change.affects_credential() {
            debug!("Ignoring unrelated storage change: {change:?}");
            return;
        }
        self.reconcile().await;
    }

    /// Wait for the next change notification and handle it.
    ///
    /// Returns false once the session can no longer deliver notifications.
    pub async fn handle_next_change(&mut self) -> bool {
        match self.changes.recv().await {
            Ok(change) => {
                self.handle_change(&change).await;
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Missed {skipped} auth changes, re-checking credential");
                self.reconcile().await;
                true
            }
            Err(RecvError::Closed) => false,
        }
    }

    /// Clear the credential, show the signed-out state and go to login.
    pub fn logout(&mut self, navigator: &dyn Navigator) -> SessionResult<()> {
        self.session.clear_credential()?;
        self.publish(IdentityState::NoCredential);
        navigator.navigate(Route::Login);
        Ok(())
    }

    /// Mount, then follow change notifications until the lifetime ends.
    ///
    /// A resolution still in flight when a newer change arrives, or when the
    /// view is unmounted, is dropped, so its response can never overwrite a
    /// newer state.
    pub async fn run(mut self, mut lifetime: LifetimeGuard) {
        let mut pending = self.begin_reconcile();

        loop {
            tokio::select! {
                _ = lifetime.ended() => {
                    debug!("Identity indicator unmounted");
                    break;
                }
                state = settle(&mut pending), if pending.is_some() => {
                    pending = None;
                    self.publish(state);
                }
                change = self.changes.recv() => match change {
                    Ok(change) if change.affects_credential() => {
                        if pending.is_some() {
                            debug!("Superseding in-flight identity request");
                        }
                        pending = self.begin_reconcile();
                    }
                    Ok(change) => debug!("Ignoring unrelated storage change: {change:?}"),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Missed {skipped} auth changes, re-checking credential");
                        pending = self.begin_reconcile();
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }
    }

    async fn reconcile(&mut self) {
        if let Some(resolution) = self.begin_reconcile() {
            let state = resolution.await;
            self.publish(state);
        }
    }

    /// Publish the state implied by credential presence right now, and
    /// return the pending lookup if one is needed.
    fn begin_reconcile(&mut self) -> Option<Resolution> {
        if self.session.has_credential() {
            self.publish(IdentityState::Resolving);
            let api = self.api.clone();
            let resolution: Resolution = Box::pin(async move { resolve(&api).await });
            Some(resolution)
        } else {
            self.publish(IdentityState::NoCredential);
            None
        }
    }

    fn publish(&self, state: IdentityState) {
        self.state.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                debug!("Identity state: {current:?} -> {state:?}");
                *current = state;
                true
            }
        });
    }
}

/// Any failure, a rejected credential included, means "no identity".
async fn resolve(api: &ApiClient) -> IdentityState {
    match api.me().await {
        Ok(identity) => {
            info!("Signed in as {}", identity.username);
            IdentityState::Identified(identity)
        }
        Err(e) if e.is_unauthorized() => {
            info!("Stored credential was rejected");
            IdentityState::NoCredential
        }
        Err(e) => {
            warn!("Could not resolve identity: {e}");
            IdentityState::NoCredential
        }
    }
}

async fn settle(pending: &mut Option<Resolution>) -> IdentityState {
    match pending {
        Some(resolution) => resolution.await,
        None => std::future::pending().await,
    }
}
