//! The state a fetch operation reads from and writes to.

use crate::cache::CatalogueCache;
use crate::selection::Selection;

/// Selection state plus the session cache, passed explicitly to every fetch.
///
/// One context belongs to one UI session. Fetch operations borrow it
/// mutably, so a context is never written by two operations at once; callers
/// sharing one across tasks must wrap it themselves.
#[derive(Debug, Clone, Default)]
pub struct CatalogueContext {
    pub selection: Selection,
    pub cache: CatalogueCache,
}

impl CatalogueContext {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            cache: CatalogueCache::default(),
        }
    }
}
