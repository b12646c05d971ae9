//! Nickname console command.
//!
//! `nickname [name...]` names whatever the player is targeting. The words
//! are joined with single spaces. No words, or words that join to an empty
//! string, clear the target's name.

use std::sync::Arc;

use nicknames_domain::{InstanceId, MirrorOutcome, NamingStore, Nickname};

use crate::entities::{Nicknames, WorldState};
use crate::infrastructure::ports::ConsolePort;

use super::error::NicknameCommandError;

pub const COMMAND_ID: &str = "nickname";
pub const COMMAND_USAGE: &str = "nickname [name]";
pub const COMMAND_DESCRIPTION: &str = "Sets the nickname of the creature or landmark you're looking at";

const NO_TARGET_MESSAGE: &str = "No nameable entity in line of sight";

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicknameOutcome {
    Renamed {
        instance_id: InstanceId,
        name: Nickname,
        store: MirrorOutcome,
    },
    Cleared {
        instance_id: InstanceId,
        /// False when the target had no name to clear.
        had_name: bool,
    },
}

/// Nickname command use case.
pub struct NicknameCommand {
    nicknames: Arc<Nicknames>,
    console: Arc<dyn ConsolePort>,
}

impl NicknameCommand {
    pub fn new(nicknames: Arc<Nicknames>, console: Arc<dyn ConsolePort>) -> Self {
        Self { nicknames, console }
    }

    /// Execute the command against the current target.
    ///
    /// # Returns
    /// * `Ok(NicknameOutcome)` - target renamed or cleared
    /// * `Err(NicknameCommandError)` - no nameable target; nothing changed
    pub fn execute<S: AsRef<str>>(
        &self,
        world: &mut WorldState,
        store: &mut NamingStore,
        args: &[S],
    ) -> Result<NicknameOutcome, NicknameCommandError> {
        let Some(target) = world.target_mut() else {
            self.console.log_error(NO_TARGET_MESSAGE);
            return Err(NicknameCommandError::NoTarget);
        };
        if !target.kind().is_nameable() {
            self.console.log_error(NO_TARGET_MESSAGE);
            return Err(NicknameCommandError::NotNameable(target.id()));
        }

        let instance_id = target.id();
        let durable_id = target.durable_id();
        let name = Nickname::from_words(args);

        if name.is_empty() {
            let had_name = self.nicknames.clear(store, target).is_some();
            if let Some(durable_id) = &durable_id {
                store.remove(durable_id);
                self.nicknames.sync_shared(world, instance_id, durable_id, None);
            }
            tracing::info!(instance_id = %instance_id, had_name, "Cleared nickname");
            self.console.log("Cleared name");
            return Ok(NicknameOutcome::Cleared {
                instance_id,
                had_name,
            });
        }

        let result = self
            .nicknames
            .assign(store, target, name.clone())
            .ok_or(NicknameCommandError::NotNameable(instance_id))?;
        if let MirrorOutcome::Stored(durable_id) = &result.store {
            self.nicknames.sync_shared(world, instance_id, durable_id, Some(&name));
        }

        tracing::info!(
            instance_id = %instance_id,
            name = %name,
            renamed_in_place = result.renamed_in_place,
            "Set nickname"
        );
        self.console.log(&format!("Name has been set to {}", name.as_str()));

        Ok(NicknameOutcome::Renamed {
            instance_id,
            name,
            store: result.store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityInstance;
    use crate::infrastructure::config::DestroyPolicy;
    use crate::infrastructure::ports::MockConsolePort;
    use nicknames_domain::{AttachmentState, DurableId, EntityKind, LandmarkModel};

    fn command_with(console: MockConsolePort) -> NicknameCommand {
        let console: Arc<dyn ConsolePort> = Arc::new(console);
        let nicknames = Arc::new(Nicknames::new(console.clone(), DestroyPolicy::Retain));
        NicknameCommand::new(nicknames, console)
    }

    fn expect_log(console: &mut MockConsolePort, expected: &'static str) {
        console
            .expect_log()
            .withf(move |msg| msg == expected)
            .times(1)
            .return_const(());
    }

    fn world_targeting(kind: EntityKind) -> (WorldState, InstanceId) {
        let mut world = WorldState::new();
        let id = world.insert(EntityInstance::new("Target", kind));
        world.set_target(Some(id));
        (world, id)
    }

    fn gordo_kind() -> EntityKind {
        EntityKind::landmark(
            LandmarkModel::Native {
                id: "gordo-3".into(),
            }
            .identity(),
        )
    }

    #[test]
    fn when_no_target_returns_error_and_leaves_store() {
        let mut console = MockConsolePort::new();
        console
            .expect_log_error()
            .withf(|msg| msg == NO_TARGET_MESSAGE)
            .times(1)
            .return_const(());
        let command = command_with(console);

        let mut world = WorldState::new();
        let mut store = NamingStore::new();
        store.set(DurableId::new("gordo-3").unwrap(), Nickname::new("Chomper"));
        let before = store.clone();

        let result = command.execute(&mut world, &mut store, &["Bob"]);

        assert_eq!(result, Err(NicknameCommandError::NoTarget));
        assert_eq!(store, before);
    }

    #[test]
    fn when_target_is_prop_reports_no_target() {
        let mut console = MockConsolePort::new();
        console.expect_log_error().times(1).return_const(());
        let command = command_with(console);

        let (mut world, id) = world_targeting(EntityKind::Prop);
        let mut store = NamingStore::new();

        let result = command.execute(&mut world, &mut store, &["Rocky"]);
        assert_eq!(result, Err(NicknameCommandError::NotNameable(id)));
    }

    #[test]
    fn names_creature_without_store_mutation() {
        let mut console = MockConsolePort::new();
        expect_log(&mut console, "Name has been set to Big Bob");
        let command = command_with(console);

        let (mut world, id) = world_targeting(EntityKind::Creature);
        let mut store = NamingStore::new();

        let outcome = command
            .execute(&mut world, &mut store, &["Big", "Bob"])
            .unwrap();

        assert_eq!(
            outcome,
            NicknameOutcome::Renamed {
                instance_id: id,
                name: Nickname::new("Big Bob"),
                store: MirrorOutcome::NotPersistent,
            }
        );
        assert!(store.is_empty());
        assert_eq!(
            world.get(id).unwrap().attachment_state(),
            AttachmentState::Ephemeral
        );
    }

    #[test]
    fn repeated_renames_keep_one_store_entry() {
        let mut console = MockConsolePort::new();
        console.expect_log().times(3).return_const(());
        let command = command_with(console);

        let (mut world, _) = world_targeting(gordo_kind());
        let mut store = NamingStore::new();

        for name in ["Chomper", "Muncher", "Big Chomper"] {
            command.execute(&mut world, &mut store, &[name]).unwrap();
        }

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&DurableId::new("gordo-3").unwrap()),
            Some(&Nickname::new("Big Chomper"))
        );
    }

    #[test]
    fn no_args_clears_landmark_and_store_entry() {
        let mut console = MockConsolePort::new();
        expect_log(&mut console, "Name has been set to Chomper");
        expect_log(&mut console, "Cleared name");
        let command = command_with(console);

        let (mut world, id) = world_targeting(gordo_kind());
        let mut store = NamingStore::new();
        command.execute(&mut world, &mut store, &["Chomper"]).unwrap();

        let none: [&str; 0] = [];
        let outcome = command.execute(&mut world, &mut store, &none).unwrap();

        assert_eq!(
            outcome,
            NicknameOutcome::Cleared {
                instance_id: id,
                had_name: true
            }
        );
        assert!(store.is_empty());
        assert!(world.get(id).unwrap().nickname().is_none());
    }

    #[test]
    fn empty_joined_text_clears() {
        let mut console = MockConsolePort::new();
        expect_log(&mut console, "Cleared name");
        let command = command_with(console);

        let (mut world, id) = world_targeting(gordo_kind());
        let mut store = NamingStore::new();

        let outcome = command.execute(&mut world, &mut store, &[""]).unwrap();

        assert_eq!(
            outcome,
            NicknameOutcome::Cleared {
                instance_id: id,
                had_name: false
            }
        );
        assert!(store.is_empty());
    }
}
