//! Nickname command errors.

use nicknames_domain::InstanceId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NicknameCommandError {
    /// Nothing is targeted.
    #[error("No target")]
    NoTarget,
    /// The target exists but its kind cannot carry a nickname.
    #[error("Target {0} cannot be named")]
    NotNameable(InstanceId),
}
