//! One grid region: owns the loading lifecycle and the pagination state for a
//! single content type, and applies UI events to it.

use crate::content::Collection;
use crate::loader::{load_collection, LoadError, SourceLocation};
use crate::paginate::PaginationState;
use crate::types::SortMode;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

pub enum RegionState<T> {
    Loading,
    /// Terminal: the collection could not be loaded
    Failed(String),
    Ready(PaginationState<T>),
}

/// Controls present next to a region. Missing ones turn their events into no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub sort_selector: bool,
    pub load_more: bool,
}

impl Controls {
    pub const FULL: Controls = Controls {
        sort_selector: true,
        load_more: true,
    };
    pub const NONE: Controls = Controls {
        sort_selector: false,
        load_more: false,
    };
}

type LoadSlot<T> = Arc<Mutex<Option<Result<Vec<T>, LoadError>>>>;

// A panic elsewhere while holding the lock leaves the slot contents intact
fn lock_slot<'a, T>(
    slot: &'a LoadSlot<T>,
    container: &str,
) -> MutexGuard<'a, Option<Result<Vec<T>, LoadError>>> {
    slot.lock().unwrap_or_else(|poisoned| {
        warn!(container, "Load result slot poisoned, recovering");
        poisoned.into_inner()
    })
}

pub struct Region<T> {
    container: &'static str,
    controls: Controls,
    /// `None` shows everything at once
    page_size: Option<usize>,
    state: RegionState<T>,
    pending: LoadSlot<T>,
}

impl<T: Collection + Send + 'static> Region<T> {
    pub fn new(container: &'static str, controls: Controls, page_size: Option<usize>) -> Self {
        Self {
            container,
            controls,
            page_size,
            state: RegionState::Loading,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn container(&self) -> &'static str {
        self.container
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn state(&self) -> &RegionState<T> {
        &self.state
    }

    #[cfg(test)]
    pub fn pagination(&self) -> Option<&PaginationState<T>> {
        match &self.state {
            RegionState::Ready(state) => Some(state),
            _ => None,
        }
    }

    pub fn error_message() -> String {
        format!("Error loading {}. Please try again later.", T::NOUN)
    }

    /// Fetch the collection in the background. `notify` runs once the result
    /// is waiting to be picked up by [`Region::poll`].
    pub fn start_loading(
        &mut self,
        runtime: &tokio::runtime::Runtime,
        location: SourceLocation,
        notify: impl FnOnce() + Send + 'static,
    ) {
        self.state = RegionState::Loading;
        let slot = self.pending.clone();
        let container = self.container;
        debug!(container, location = %location, "Loading collection");

        runtime.spawn(async move {
            let client = reqwest::Client::new();
            let result = load_collection::<T>(&client, &location).await;
            *lock_slot(&slot, container) = Some(result);
            notify();
        });
    }

    /// Pick up a finished load. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        if !matches!(self.state, RegionState::Loading) {
            return false;
        }
        let finished = lock_slot(&self.pending, self.container).take();
        match finished {
            Some(result) => {
                self.finish_loading(result);
                true
            }
            None => false,
        }
    }

    pub fn finish_loading(&mut self, result: Result<Vec<T>, LoadError>) {
        self.state = match result {
            Ok(items) => {
                info!(container = self.container, count = items.len(), "Collection ready");
                let state = match self.page_size {
                    Some(size) => PaginationState::new(items, size),
                    None => PaginationState::unpaginated(items),
                };
                RegionState::Ready(state)
            }
            Err(e) => {
                error!(container = self.container, error = %e, "Error loading collection");
                RegionState::Failed(Self::error_message())
            }
        };
    }

    /// Apply a value emitted by the sort selector
    pub fn select_sort(&mut self, value: &str) {
        if !self.controls.sort_selector {
            debug!(container = self.container, "No sort selector, ignoring");
            return;
        }
        let RegionState::Ready(state) = &mut self.state else {
            debug!(container = self.container, "Sort change before data loaded, ignoring");
            return;
        };
        match value.parse::<SortMode>() {
            Ok(mode) => state.on_sort_change(mode),
            Err(e) => warn!(container = self.container, error = %e, "Keeping current sort mode"),
        }
    }

    pub fn load_more(&mut self) {
        if !self.controls.load_more {
            debug!(container = self.container, "No load-more trigger, ignoring");
            return;
        }
        match &mut self.state {
            RegionState::Ready(state) => state.on_load_more(),
            _ => debug!(container = self.container, "Load more before data loaded, ignoring"),
        }
    }
}
