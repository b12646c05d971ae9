//! Application state and composition.
//!
//! [`App`] owns the naming store and the live world for one session and
//! exposes the host events the nickname system reacts to: materialization,
//! destruction, the console command, targeting, and world save/load.

use std::path::Path;
use std::sync::Arc;

use nicknames_domain::{EntityKind, InstanceId, LandmarkIdentity, LandmarkModel, NamingStore};

use crate::entities::{EntityInstance, Nicknames, WorldState};
use crate::infrastructure::config::NicknameConfig;
use crate::infrastructure::persistence::{
    write_actor_data, CompoundPiece, EntityRecord, LoadSummary, NamingSection, PersistenceError,
    SaveFile,
};
use crate::infrastructure::ports::ConsolePort;
use crate::use_cases::nickname::apply_label_override;
use crate::use_cases::{NicknameCommand, NicknameCommandError, NicknameOutcome, WorldDataHooks};

const ACTOR_DATA_KEY: &str = "actor";

/// Container for all use cases.
pub struct UseCases {
    pub command: NicknameCommand,
    pub world_data: WorldDataHooks,
}

/// Main application state.
pub struct App {
    config: NicknameConfig,
    store: NamingStore,
    world: WorldState,
    nicknames: Arc<Nicknames>,
    pub use_cases: UseCases,
}

impl App {
    pub fn new(config: NicknameConfig, console: Arc<dyn ConsolePort>) -> Self {
        let nicknames = Arc::new(Nicknames::new(console.clone(), config.destroy_policy));
        let use_cases = UseCases {
            command: NicknameCommand::new(nicknames.clone(), console),
            world_data: WorldDataHooks::new(NamingSection::new(config.section_name.clone())),
        };

        tracing::debug!(
            section = %config.section_name,
            destroy_policy = %config.destroy_policy,
            "Nickname engine ready"
        );

        Self {
            config,
            store: NamingStore::new(),
            world: WorldState::new(),
            nicknames,
            use_cases,
        }
    }

    pub fn config(&self) -> &NicknameConfig {
        &self.config
    }

    pub fn store(&self) -> &NamingStore {
        &self.store
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    // =========================================================================
    // Entity lifecycle
    // =========================================================================

    pub fn spawn_creature(&mut self, label: impl Into<String>) -> InstanceId {
        self.materialize(EntityInstance::new(label, EntityKind::Creature))
    }

    /// Spawn a creature from its saved per-actor data.
    pub fn spawn_creature_with_data(
        &mut self,
        label: impl Into<String>,
        data: &CompoundPiece,
    ) -> InstanceId {
        let mut instance = EntityInstance::new(label, EntityKind::Creature);
        self.nicknames.restore_actor_data(&mut instance, data);
        self.materialize(instance)
    }

    /// Spawn a landmark from either model shape.
    pub fn spawn_landmark(
        &mut self,
        label: impl Into<String>,
        model: &LandmarkModel,
    ) -> InstanceId {
        self.spawn_landmark_with_identity(label, model.identity())
    }

    pub fn spawn_landmark_with_identity(
        &mut self,
        label: impl Into<String>,
        identity: LandmarkIdentity,
    ) -> InstanceId {
        self.materialize(EntityInstance::new(label, EntityKind::landmark(identity)))
    }

    pub fn spawn_prop(&mut self, label: impl Into<String>) -> InstanceId {
        self.materialize(EntityInstance::new(label, EntityKind::Prop))
    }

    fn materialize(&mut self, mut instance: EntityInstance) -> InstanceId {
        self.nicknames.on_materialized(&self.store, &mut instance);
        tracing::debug!(
            instance_id = %instance.id(),
            kind = %instance.kind(),
            state = %instance.attachment_state(),
            "Entity materialized"
        );
        self.world.insert(instance)
    }

    /// Destroy an instance. Returns false for unknown ids.
    pub fn destroy(&mut self, id: InstanceId) -> bool {
        match self.world.remove(id) {
            Some(instance) => {
                // Another live instance still carries the name.
                let shared = instance
                    .durable_id()
                    .is_some_and(|durable_id| self.world.has_durable_id(&durable_id));
                if !shared {
                    self.nicknames.on_destroyed(&mut self.store, &instance);
                }
                true
            }
            None => false,
        }
    }

    fn unload_world(&mut self) {
        for instance in self.world.drain() {
            self.nicknames.on_destroyed(&mut self.store, &instance);
        }
    }

    // =========================================================================
    // Targeting and command
    // =========================================================================

    pub fn set_target(&mut self, id: Option<InstanceId>) -> bool {
        self.world.set_target(id)
    }

    /// Run `nickname [args...]` against the current target.
    pub fn nickname<S: AsRef<str>>(
        &mut self,
        args: &[S],
    ) -> Result<NicknameOutcome, NicknameCommandError> {
        self.use_cases
            .command
            .execute(&mut self.world, &mut self.store, args)
    }

    /// Label the targeting UI shows for the current target.
    pub fn target_label(&self) -> Option<String> {
        let target = self.world.target()?;
        let mut label = target.label().to_string();
        apply_label_override(true, target, &mut label);
        Some(label)
    }

    // =========================================================================
    // World data
    // =========================================================================

    pub fn save_world_data(&self, data: &mut CompoundPiece) {
        self.use_cases.world_data.on_world_save(&self.store, data);
    }

    /// Replace the naming store from world data. Runs before entities of the
    /// loaded world materialize.
    pub fn load_world_data(&mut self, data: &CompoundPiece) -> LoadSummary {
        self.use_cases.world_data.on_world_load(&mut self.store, data)
    }

    /// Leave the world: every instance is destroyed and the store emptied.
    pub fn return_to_main_menu(&mut self) {
        self.unload_world();
        self.use_cases.world_data.on_main_menu(&mut self.store);
        tracing::info!("Returned to main menu");
    }

    /// Write world data and every live entity to a save file.
    pub fn save_to(&self, path: &Path) -> Result<(), PersistenceError> {
        let mut save = SaveFile::default();
        self.save_world_data(&mut save.world_data);
        save.entities = self.world.iter().map(entity_record).collect();
        save.write(path)?;

        tracing::info!(
            path = %path.display(),
            names = self.store.len(),
            entities = save.entities.len(),
            "Saved world"
        );
        Ok(())
    }

    /// Load a save file, replacing the current world.
    ///
    /// On error nothing changes.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadSummary, PersistenceError> {
        let save = SaveFile::read(path)?;

        self.unload_world();
        let summary = self.load_world_data(&save.world_data);

        for record in save.entities {
            match record.kind {
                EntityKind::Creature => {
                    self.spawn_creature_with_data(record.label, &record.data);
                }
                EntityKind::Landmark { identity } => {
                    self.spawn_landmark_with_identity(record.label, identity);
                }
                EntityKind::Prop => {
                    self.spawn_prop(record.label);
                }
            }
        }

        tracing::info!(
            path = %path.display(),
            names = self.store.len(),
            entities = self.world.len(),
            "Loaded world"
        );
        Ok(summary)
    }
}

fn entity_record(instance: &EntityInstance) -> EntityRecord {
    let mut data = CompoundPiece::new(ACTOR_DATA_KEY);
    if let Some(attachment) = instance.nickname() {
        write_actor_data(attachment, &mut data);
    }
    EntityRecord {
        label: instance.label().to_string(),
        kind: instance.kind().clone(),
        data,
    }
}
