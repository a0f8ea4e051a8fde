//! Holder for the views of the currently open project.

use crate::fragment::TaggedFragment;

use super::{ViewBundle, ViewKind};

/// The single source of truth for what can currently be displayed.
///
/// A bundle is only ever replaced as a whole: [`load`](Self::load) swaps in
/// a freshly built one, [`reset`](Self::reset) drops it.
#[derive(Debug, Default)]
pub struct ViewStore {
    bundle: Option<ViewBundle>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current views, returning the previous bundle if any.
    pub fn load(&mut self, bundle: ViewBundle) -> Option<ViewBundle> {
        self.bundle.replace(bundle)
    }

    /// Drop all views. Every stream reads as empty afterwards.
    pub fn reset(&mut self) {
        self.bundle = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.bundle.is_some()
    }

    pub fn bundle(&self) -> Option<&ViewBundle> {
        self.bundle.as_ref()
    }

    /// Fragments of one view; empty when nothing is loaded.
    pub fn view(&self, kind: ViewKind) -> &[TaggedFragment] {
        match &self.bundle {
            Some(bundle) => bundle.get(kind),
            None => &[],
        }
    }

    /// Statistics line; empty when nothing is loaded.
    pub fn summary(&self) -> &str {
        self.bundle.as_ref().map_or("", |b| b.summary.as_str())
    }
}
