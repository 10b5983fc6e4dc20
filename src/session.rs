//! Per-view request state with stale-response suppression.
//!
//! Every fetch cycle takes a ticket. Starting a newer cycle or tearing the
//! view down invalidates older tickets, and a cycle that completes with an
//! invalidated ticket is discarded. The in-flight request itself is not
//! aborted; only its effect on state is suppressed.
//!
//! The HTTP routes are stateless and never hold a view. [`DashboardView`] is
//! library API for embedding callers that keep one long-lived view per screen
//! and switch the user identifier under it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::Gateway;
use crate::models::Dashboard;
use crate::pipeline::load_dashboard;

// ---

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(GatewayError),
}

/// Generation stamp for one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Dashboard state for one consuming view.
#[derive(Debug)]
pub struct DashboardView {
    gateway: Arc<Gateway>,
    generation: AtomicU64,
    state: Mutex<RequestState<Dashboard>>,
}

impl DashboardView {
    // ---
    pub fn new(gateway: Arc<Gateway>) -> Self {
        // ---
        DashboardView {
            gateway,
            generation: AtomicU64::new(0),
            state: Mutex::new(RequestState::Idle),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RequestState<Dashboard>> {
        // Writers only ever assign whole values, so a poisoned guard is still coherent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> RequestState<Dashboard> {
        self.lock_state().clone()
    }

    /// Start a cycle: invalidate older tickets and enter `Loading`.
    pub fn begin(&self) -> Ticket {
        // ---
        let ticket = Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        *self.lock_state() = RequestState::Loading;
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply a finished cycle's result if its ticket is still current.
    ///
    /// Returns whether the result was applied.
    pub fn complete(&self, ticket: Ticket, result: GatewayResult<Dashboard>) -> bool {
        // ---
        let mut state = self.lock_state();
        if !self.is_current(ticket) {
            debug!("Discarding stale dashboard result (ticket {})", ticket.0);
            return false;
        }
        *state = match result {
            Ok(dashboard) => RequestState::Ready(dashboard),
            Err(e) => RequestState::Failed(e),
        };
        true
    }

    /// Run one full cycle for `user_id`.
    pub async fn load(&self, user_id: u32) -> bool {
        // ---
        let ticket = self.begin();
        let result = load_dashboard(&self.gateway, user_id).await;
        self.complete(ticket, result)
    }

    /// Invalidate any outstanding cycle and reset to `Idle`.
    pub fn teardown(&self) {
        // ---
        let mut state = self.lock_state();
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = RequestState::Idle;
    }
}
