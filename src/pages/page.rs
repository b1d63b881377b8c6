use crate::{errors::ApiError, shapes::banner::Banner};
use std::sync::Arc;

/// Lifecycle of a view's list. Rows are immutable snapshots: every change
/// builds a new sequence instead of editing the current one.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Loaded(Arc<[T]>),
    Mutating(Arc<[T]>),
    LoadError(String),
}

/// State shared by all page controllers: the list and the status banner.
#[derive(Debug)]
pub struct Page<T> {
    state: PageState<T>,
    banner: Option<Banner>,
}

impl<T: Clone> Default for Page<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Page<T> {
    pub fn new() -> Self {
        Self {
            state: PageState::Idle,
            banner: None,
        }
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    pub fn rows(&self) -> &[T] {
        match &self.state {
            PageState::Loaded(rows) | PageState::Mutating(rows) => rows,
            _ => &[],
        }
    }

    pub fn snapshot(&self) -> Arc<[T]> {
        Arc::from(self.rows())
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn set_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    pub fn start_loading(&mut self, banner: Banner) {
        self.state = PageState::Loading;
        self.banner = Some(banner);
    }

    /// Ends a load. Transport failures have already been settled into an
    /// empty list by the caller, so an error here is a malformed response.
    pub fn finish_loading<L, F>(
        &mut self,
        result: Result<Vec<T>, ApiError>,
        loaded: L,
        empty: Banner,
        failed: F,
    ) where
        L: FnOnce(usize) -> Banner,
        F: FnOnce(&ApiError) -> Banner,
    {
        match result {
            Ok(rows) if rows.is_empty() => {
                self.state = PageState::Loaded(Arc::from(rows));
                self.banner = Some(empty);
            }
            Ok(rows) => {
                self.banner = Some(loaded(rows.len()));
                self.state = PageState::Loaded(Arc::from(rows));
            }
            Err(e) => {
                self.banner = Some(failed(&e));
                self.state = PageState::LoadError(e.to_string());
            }
        }
    }

    pub fn replace_rows(&mut self, rows: Vec<T>) {
        self.state = PageState::Loaded(Arc::from(rows));
    }

    /// Marks a write as in flight, returning the state to restore on failure.
    pub fn begin_mutation(&mut self) -> PageState<T> {
        let previous = self.state.clone();
        self.state = PageState::Mutating(self.snapshot());
        previous
    }

    pub fn finish_delete(
        &mut self,
        previous: PageState<T>,
        index: usize,
        deleted: bool,
        success: Banner,
        failure: Banner,
    ) {
        if deleted && index < self.rows().len() {
            let rows: Vec<T> = self
                .rows()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, row)| row.clone())
                .collect();
            self.state = PageState::Loaded(Arc::from(rows));
            self.banner = Some(success);
        } else {
            self.state = previous;
            self.banner = Some(failure);
        }
    }

    pub fn finish_create(
        &mut self,
        previous: PageState<T>,
        result: Result<Option<T>, ApiError>,
        success: Banner,
        failure: Banner,
    ) {
        match result {
            Ok(Some(created)) => {
                let mut rows = self.rows().to_vec();
                rows.push(created);
                self.state = PageState::Loaded(Arc::from(rows));
                self.banner = Some(success);
            }
            other => self.abort_mutation(previous, other.err(), failure),
        }
    }

    pub fn finish_update(
        &mut self,
        previous: PageState<T>,
        index: usize,
        result: Result<Option<T>, ApiError>,
        success: Banner,
        failure: Banner,
    ) {
        match result {
            Ok(Some(updated)) if index < self.rows().len() => {
                let rows: Vec<T> = self
                    .rows()
                    .iter()
                    .enumerate()
                    .map(|(i, row)| if i == index { updated.clone() } else { row.clone() })
                    .collect();
                self.state = PageState::Loaded(Arc::from(rows));
                self.banner = Some(success);
            }
            other => self.abort_mutation(previous, other.err(), failure),
        }
    }

    fn abort_mutation(&mut self, previous: PageState<T>, error: Option<ApiError>, failure: Banner) {
        self.state = previous;
        self.banner = Some(match error {
            Some(e) => Banner {
                text: format!("{}: {}", failure.text, e),
                ..failure
            },
            None => failure,
        });
    }
}
