//! Nicknames Engine - console host simulator.
//!
//! Reads one command per line from stdin and drives the nickname system the
//! way a game host would: spawning and destroying entities, moving the
//! target, running `nickname`, and saving or loading the world.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nicknames_domain::{InstanceId, LandmarkModel};
use nicknames_engine::infrastructure::config::NicknameConfig;
use nicknames_engine::infrastructure::console::StdoutConsole;
use nicknames_engine::use_cases::nickname::command::{
    COMMAND_DESCRIPTION, COMMAND_ID, COMMAND_USAGE,
};
use nicknames_engine::use_cases::nickname::display_label;
use nicknames_engine::App;

const HELP: &str = "\
commands:
  spawn creature <label>
  spawn landmark <id> <label>
  spawn placed <site> <label>
  spawn prop <label>
  target <n> | untarget
  label | list | destroy
  save [path] | load [path]
  menu | help | quit";

fn main() -> anyhow::Result<()> {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nicknames_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = NicknameConfig::from_env()?;
    tracing::info!(
        section = %config.section_name,
        destroy_policy = %config.destroy_policy,
        save_path = %config.save_path.display(),
        "Starting Nicknames Engine"
    );

    let mut app = App::new(config, Arc::new(StdoutConsole::new()));
    print_help();

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match run_line(&mut app, &words) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("error: {e:#}"),
        }
    }

    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn run_line(app: &mut App, words: &[&str]) -> anyhow::Result<Flow> {
    match words {
        [] => {}
        ["quit"] | ["exit"] => return Ok(Flow::Quit),
        ["help"] => print_help(),
        ["spawn", "creature", label @ ..] => {
            let id = app.spawn_creature(join_label(label, "Creature"));
            println!("spawned {id}");
        }
        ["spawn", "landmark", id, label @ ..] => {
            let model = LandmarkModel::Native { id: id.to_string() };
            let id = app.spawn_landmark(join_label(label, "Landmark"), &model);
            println!("spawned {id}");
        }
        ["spawn", "placed", site, label @ ..] => {
            let model = LandmarkModel::Placed {
                site_id: site.to_string(),
            };
            let id = app.spawn_landmark(join_label(label, "Placed Landmark"), &model);
            println!("spawned {id}");
        }
        ["spawn", "prop", label @ ..] => {
            let id = app.spawn_prop(join_label(label, "Prop"));
            println!("spawned {id}");
        }
        ["target", n] => {
            let id = nth_instance(app, n)?;
            app.set_target(Some(id));
        }
        ["untarget"] => {
            app.set_target(None);
        }
        [COMMAND_ID, args @ ..] => match app.nickname(args) {
            Ok(outcome) => tracing::debug!(?outcome, "Nickname command done"),
            // Already reported on the console.
            Err(e) => tracing::debug!(error = %e, "Nickname command rejected"),
        },
        ["label"] => match app.target_label() {
            Some(label) => println!("{label}"),
            None => println!("(no target)"),
        },
        ["list"] => list(app),
        ["destroy"] => {
            let target = app.world().target().map(|t| t.id());
            match target {
                Some(id) => {
                    app.destroy(id);
                }
                None => println!("(no target)"),
            }
        }
        ["save", rest @ ..] => {
            let path = path_arg(app, rest);
            app.save_to(&path)?;
            println!("saved to {}", path.display());
        }
        ["load", rest @ ..] => {
            let path = path_arg(app, rest);
            let summary = app.load_from(&path)?;
            println!(
                "loaded {} name(s), {} entit(ies) from {}",
                summary.loaded,
                app.world().len(),
                path.display()
            );
        }
        ["menu"] => app.return_to_main_menu(),
        _ => anyhow::bail!("unknown command (try `help`)"),
    }
    Ok(Flow::Continue)
}

fn print_help() {
    println!("{HELP}");
    println!("  {COMMAND_USAGE}: {COMMAND_DESCRIPTION}");
}

fn join_label(words: &[&str], fallback: &str) -> String {
    if words.is_empty() {
        fallback.to_string()
    } else {
        words.join(" ")
    }
}

fn path_arg(app: &App, rest: &[&str]) -> PathBuf {
    match rest.first() {
        Some(path) => PathBuf::from(path),
        None => app.config().save_path.clone(),
    }
}

fn nth_instance(app: &App, n: &str) -> anyhow::Result<InstanceId> {
    let index: usize = n.parse()?;
    app.world()
        .iter()
        .nth(index)
        .map(|e| e.id())
        .ok_or_else(|| anyhow::anyhow!("no entity at index {index}"))
}

fn list(app: &App) {
    let target = app.world().target().map(|t| t.id());
    for (index, entity) in app.world().iter().enumerate() {
        let marker = if Some(entity.id()) == target { "*" } else { " " };
        let durable = entity
            .nickname()
            .and_then(|a| a.durable_id())
            .map(|id| format!(" [{id}]"))
            .unwrap_or_default();
        println!(
            "{marker}{index}: {} ({}, {}){durable}",
            display_label(entity),
            entity.kind(),
            entity.attachment_state()
        );
    }
    println!("{} stored name(s) in the naming store", app.store().len());
}
