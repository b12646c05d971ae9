//! Targeting label override.

use crate::entities::{EntityInstance, Nicknames};

/// Substitute a targeted instance's nickname into the label text.
///
/// Runs after the host resolved a display target. Nothing changes when the
/// resolution failed or the instance has no non-empty nickname. Returns true
/// when the label was replaced.
pub fn apply_label_override(
    target_resolved: bool,
    instance: &EntityInstance,
    label_text: &mut String,
) -> bool {
    if !target_resolved {
        return false;
    }
    match Nicknames::label_override(instance) {
        Some(name) => {
            *label_text = name.to_string();
            true
        }
        None => false,
    }
}

/// Label to show for an instance: its nickname, or the default label.
pub fn display_label(instance: &EntityInstance) -> &str {
    Nicknames::label_override(instance).unwrap_or_else(|| instance.label())
}
