//! Predicts whether an element stays listed in a location after an action

use crate::actions::{LabelChanges, MailAction, MarkAsStatus};
use crate::models::{LabelId, MailboxLocation, ReadFilter};

/// Whether an element affected by `action` is still listed in `location`
/// once the action has been applied.
///
/// Missing destination or change data never hides an element.
pub fn remains_visible(action: &MailAction, location: &MailboxLocation) -> bool {
    match action {
        MailAction::Move { destination, .. } => move_keeps(destination.as_ref(), location),
        MailAction::ApplyLabel { changes, .. } => labels_keep(changes, location),
        MailAction::Star { unstar, .. } => star_keeps(*unstar, location),
        MailAction::PermanentDelete { .. } => false,
        MailAction::MarkAs { status, .. } => mark_as_keeps(*status, location),
    }
}

/// A move only keeps the element when it targets the current location
pub fn move_keeps(destination: Option<&LabelId>, location: &MailboxLocation) -> bool {
    destination.is_none_or(|dest| dest == &location.label_id)
}

/// Label changes hide the element only when they remove the current label
pub fn labels_keep(changes: &LabelChanges, location: &MailboxLocation) -> bool {
    !changes.removes(&location.label_id)
}

/// Unstarring hides the element from Starred; nothing else does
pub fn star_keeps(unstar: bool, location: &MailboxLocation) -> bool {
    !(unstar && location.label_id.is_starred())
}

/// Marking hides the element only from a list filtered on the opposite state
pub fn mark_as_keeps(status: MarkAsStatus, location: &MailboxLocation) -> bool {
    match (location.filter, status) {
        (Some(ReadFilter::Unread), MarkAsStatus::Read) => false,
        (Some(ReadFilter::Read), MarkAsStatus::Unread) => false,
        _ => true,
    }
}
