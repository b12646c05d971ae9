//! End-to-end nickname scenarios through `App`.

use std::sync::Arc;

use nicknames_domain::{AttachmentState, DurableId, LandmarkModel, MirrorOutcome, Nickname};

use crate::app::App;
use crate::infrastructure::config::{DestroyPolicy, NicknameConfig};
use crate::infrastructure::console::{ConsoleLevel, RecordingConsole};
use crate::infrastructure::persistence::{CompoundPiece, DataPiece};
use crate::use_cases::{NicknameCommandError, NicknameOutcome};

fn app_with(policy: DestroyPolicy) -> (App, Arc<RecordingConsole>) {
    let console = Arc::new(RecordingConsole::new());
    let config = NicknameConfig::default().with_destroy_policy(policy);
    (App::new(config, console.clone()), console)
}

fn id(raw: &str) -> DurableId {
    DurableId::new(raw).unwrap()
}

fn gordo(id: &str) -> LandmarkModel {
    LandmarkModel::Native { id: id.into() }
}

fn placed(site: &str) -> LandmarkModel {
    LandmarkModel::Placed {
        site_id: site.into(),
    }
}

#[test]
fn nickname_without_target_reports_error() {
    let (mut app, console) = app_with(DestroyPolicy::Retain);

    let result = app.nickname(&["Bob"]);

    assert_eq!(result, Err(NicknameCommandError::NoTarget));
    assert!(app.store().is_empty());
    assert!(console.contains(ConsoleLevel::Error, "No nameable entity in line of sight"));
}

#[test]
fn creature_nickname_shows_in_label_only() {
    let (mut app, console) = app_with(DestroyPolicy::Retain);
    let slime = app.spawn_creature("Pink Slime");
    app.set_target(Some(slime));

    assert_eq!(app.target_label().as_deref(), Some("Pink Slime"));
    let outcome = app.nickname(&["Big", "Bob"]).unwrap();

    assert!(matches!(
        outcome,
        NicknameOutcome::Renamed {
            store: MirrorOutcome::NotPersistent,
            ..
        }
    ));
    assert_eq!(app.target_label().as_deref(), Some("Big Bob"));
    assert!(app.store().is_empty());
    assert!(console.contains(ConsoleLevel::Info, "Name has been set to Big Bob"));
}

#[test]
fn save_restart_load_restores_landmark_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let chomper = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(chomper));
    app.nickname(&["Chomper"]).unwrap();
    app.save_to(&path).unwrap();

    // Simulate restart.
    let (mut restarted, _) = app_with(DestroyPolicy::Retain);
    assert!(restarted.store().is_empty());

    let summary = restarted.load_from(&path).unwrap();

    assert_eq!(summary.loaded, 1);
    assert_eq!(
        restarted.store().get(&id("gordo-3")),
        Some(&Nickname::new("Chomper"))
    );
    let reloaded = restarted.world().iter().next().unwrap();
    assert_eq!(reloaded.attachment_state(), AttachmentState::IdentifierBacked);
    assert_eq!(
        reloaded.nickname().map(|a| a.name().as_str()),
        Some("Chomper")
    );
}

#[test]
fn save_and_load_restores_creature_names_through_actor_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let slime = app.spawn_creature("Pink Slime");
    app.spawn_creature("Tabby Slime");
    app.set_target(Some(slime));
    app.nickname(&["Big", "Bob"]).unwrap();
    app.save_to(&path).unwrap();

    let (mut restarted, _) = app_with(DestroyPolicy::Retain);
    restarted.load_from(&path).unwrap();

    let states: Vec<AttachmentState> = restarted
        .world()
        .iter()
        .map(|e| e.attachment_state())
        .collect();
    assert_eq!(
        states,
        vec![AttachmentState::Ephemeral, AttachmentState::Unattached]
    );
    assert!(restarted.store().is_empty());
}

#[test]
fn rehydration_names_new_instance_without_user_action() {
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let mut data = CompoundPiece::new("world");
    let mut names = CompoundPiece::new("gordoNames");
    names.set_value("site-7", "Bob");
    data.add_piece(DataPiece::compound(names));

    app.load_world_data(&data);
    let instance = app.spawn_landmark("Snared Gordo", &placed("site-7"));
    app.set_target(Some(instance));

    assert_eq!(app.target_label().as_deref(), Some("Bob"));
}

#[test]
fn clear_then_respawn_finds_nothing() {
    let (mut app, console) = app_with(DestroyPolicy::Retain);
    let first = app.spawn_landmark("Pink Gordo", &placed("site-7"));
    app.set_target(Some(first));
    app.nickname(&["Bob"]).unwrap();

    let none: [&str; 0] = [];
    app.nickname(&none).unwrap();
    assert!(console.contains(ConsoleLevel::Info, "Cleared name"));
    assert!(app.store().is_empty());

    app.destroy(first);
    let second = app.spawn_landmark("Pink Gordo", &placed("site-7"));
    assert!(app.world().get(second).unwrap().nickname().is_none());
}

#[test]
fn retain_policy_survives_despawn_respawn() {
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let first = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(first));
    app.nickname(&["Chomper"]).unwrap();

    assert!(app.destroy(first));
    let second = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(second));

    assert_eq!(app.target_label().as_deref(), Some("Chomper"));
}

#[test]
fn remove_policy_forgets_on_despawn() {
    let (mut app, _) = app_with(DestroyPolicy::Remove);
    let first = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(first));
    app.nickname(&["Chomper"]).unwrap();

    assert!(app.destroy(first));
    assert!(app.store().is_empty());

    let second = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(second));
    assert_eq!(app.target_label().as_deref(), Some("Pink Gordo"));
}

#[test]
fn main_menu_clears_store_and_world() {
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let target = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(target));
    app.nickname(&["Chomper"]).unwrap();

    app.return_to_main_menu();

    assert!(app.store().is_empty());
    assert!(app.world().is_empty());
    assert_eq!(app.target_label(), None);
}

#[test]
fn both_model_shapes_share_a_name() {
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let native = app.spawn_landmark("Gordo", &gordo("x-1"));
    app.set_target(Some(native));
    app.nickname(&["Shared"]).unwrap();

    let gadget = app.spawn_landmark("Gadget", &placed("x-1"));
    app.set_target(Some(gadget));
    assert_eq!(app.target_label().as_deref(), Some("Shared"));
}

#[test]
fn clearing_one_shape_clears_the_other_live_instance() {
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let native = app.spawn_landmark("Gordo", &gordo("x-1"));
    app.set_target(Some(native));
    app.nickname(&["Shared"]).unwrap();
    let gadget = app.spawn_landmark("Gadget", &placed("x-1"));

    app.set_target(Some(gadget));
    let none: [&str; 0] = [];
    app.nickname(&none).unwrap();

    app.set_target(Some(native));
    assert!(app.store().is_empty());
    assert_eq!(app.target_label().as_deref(), Some("Gordo"));
}

#[test]
fn renaming_one_shape_renames_the_other_live_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let native = app.spawn_landmark("Gordo", &gordo("x-1"));
    let gadget = app.spawn_landmark("Gadget", &placed("x-1"));

    app.set_target(Some(gadget));
    app.nickname(&["Shared"]).unwrap();
    app.set_target(Some(native));
    assert_eq!(app.target_label().as_deref(), Some("Shared"));

    app.nickname(&["Renamed"]).unwrap();
    app.set_target(Some(gadget));
    assert_eq!(app.target_label().as_deref(), Some("Renamed"));

    app.save_to(&path).unwrap();
    let (mut restarted, _) = app_with(DestroyPolicy::Retain);
    restarted.load_from(&path).unwrap();
    let labels: Vec<Option<&str>> = restarted
        .world()
        .iter()
        .map(|e| e.nickname().map(|a| a.name().as_str()))
        .collect();
    assert_eq!(labels, vec![Some("Renamed"), Some("Renamed")]);
}

#[test]
fn remove_policy_keeps_name_while_another_instance_lives() {
    let (mut app, _) = app_with(DestroyPolicy::Remove);
    let native = app.spawn_landmark("Gordo", &gordo("x-1"));
    app.set_target(Some(native));
    app.nickname(&["Shared"]).unwrap();
    let gadget = app.spawn_landmark("Gadget", &placed("x-1"));

    assert!(app.destroy(native));
    assert_eq!(app.store().get(&id("x-1")), Some(&Nickname::new("Shared")));

    assert!(app.destroy(gadget));
    assert!(app.store().is_empty());
}

#[test]
fn failed_load_keeps_current_world() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _) = app_with(DestroyPolicy::Retain);
    let target = app.spawn_landmark("Pink Gordo", &gordo("gordo-3"));
    app.set_target(Some(target));
    app.nickname(&["Chomper"]).unwrap();

    let err = app.load_from(&dir.path().join("missing.json")).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(app.store().len(), 1);
    assert_eq!(app.world().len(), 1);
}
