//! Use cases - user story orchestration across entities.

pub mod nickname;

pub use nickname::{NicknameCommand, NicknameCommandError, NicknameOutcome, WorldDataHooks};
