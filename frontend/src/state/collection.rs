use crate::api::{ApiError, Id, Identified};
use leptos::*;
use std::future::Future;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Page-scoped copy of a backend collection.
///
/// Every load takes a ticket; only the result carrying the newest ticket is
/// applied, so a slow response never overwrites a fresher one. Mutations are
/// reconciled explicitly: a delete removes exactly one row and only after the
/// backend confirmed it, and saved rows are upserted by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    phase: LoadPhase,
    error: Option<String>,
    ticket: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            error: None,
            ticket: 0,
        }
    }
}

impl<T: Identified + Clone> ListState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn begin_load(&mut self) -> u64 {
        self.ticket += 1;
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.ticket
    }

    /// Returns `false` when the result belongs to a superseded load.
    pub fn apply_load(&mut self, ticket: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
                self.error = None;
            }
            Err(err) => {
                self.items = Vec::new();
                self.phase = LoadPhase::Failed;
                self.error = Some(err.error);
            }
        }
        true
    }

    pub fn apply_delete(&mut self, id: Id, result: &Result<(), ApiError>) -> bool {
        if result.is_err() {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before != self.items.len()
    }

    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|row| row.id() == item.id()) {
            Some(row) => *row = item,
            None => self.items.push(item),
        }
    }

    pub fn find(&self, id: Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Starts a ticketed load into `list`. Results arriving after the page was
/// disposed are dropped.
pub fn spawn_load<T, F>(list: RwSignal<ListState<T>>, label: &'static str, fetch: F)
where
    T: Identified + Clone + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(ticket) = list.try_update(|state| state.begin_load()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            log::error!("Failed to load {}: {}", label, err);
        }
        list.try_update(|state| state.apply_load(ticket, result));
    });
}

/// Loads a single value, such as a report, into `slot`. `None` means the
/// load is still in flight.
pub fn spawn_fetch<T, F>(slot: RwSignal<Option<Result<T, ApiError>>>, label: &'static str, fetch: F)
where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    if slot.try_update(|value| *value = None).is_none() {
        return;
    }
    spawn_local(async move {
        let result = fetch.await;
        if let Err(err) = &result {
            log::error!("Failed to load {}: {}", label, err);
        }
        let _ = slot.try_set(Some(result));
    });
}
