//! World data lifecycle hooks: load, save, and return to main menu.

use nicknames_domain::NamingStore;

use crate::infrastructure::persistence::{CompoundPiece, LoadSummary, NamingSection};

/// Moves the naming store in and out of world save data.
pub struct WorldDataHooks {
    section: NamingSection,
}

impl WorldDataHooks {
    pub fn new(section: NamingSection) -> Self {
        Self { section }
    }

    /// World data is loading. Must run before any entity rehydrates.
    pub fn on_world_load(&self, store: &mut NamingStore, data: &CompoundPiece) -> LoadSummary {
        self.section.load(store, data)
    }

    /// World data is being saved.
    pub fn on_world_save(&self, store: &NamingStore, data: &mut CompoundPiece) {
        self.section.save(store, data);
    }

    /// No world is loaded any more.
    pub fn on_main_menu(&self, store: &mut NamingStore) {
        let dropped = store.len();
        store.clear();
        tracing::debug!(dropped, "Cleared naming store on return to main menu");
    }
}
