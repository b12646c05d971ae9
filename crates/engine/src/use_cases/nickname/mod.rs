//! Nickname use cases.
//!
//! - `command` - the `nickname [name]` console command
//! - `world_data` - load/save/main-menu hooks for the naming store
//! - `label` - targeting label override

pub mod command;
pub mod error;
pub mod label;
pub mod world_data;

pub use command::{NicknameCommand, NicknameOutcome};
pub use error::NicknameCommandError;
pub use label::{apply_label_override, display_label};
pub use world_data::WorldDataHooks;
