//! Local submission validation and commit message composition.

use std::fmt;

use driftdeck_types::CommitRequest;

use crate::selection::SelectionSet;

/// Selections larger than this require a host-side confirmation prompt
pub const CONFIRM_THRESHOLD: usize = 50;

/// Validation failures caught before any request reaches the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyMessage,
    EmptySelection,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptyMessage => write!(f, "commit message must not be empty"),
            SubmitError::EmptySelection => write!(f, "no records selected"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// How a validated submission reaches the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Within the threshold: commit directly.
    Commit(CommitRequest),
    /// Above the threshold: the host prompts before committing.
    Confirm {
        payload: CommitRequest,
        item_count: usize,
    },
}

impl SubmitAction {
    pub fn payload(&self) -> &CommitRequest {
        match self {
            SubmitAction::Commit(payload) => payload,
            SubmitAction::Confirm { payload, .. } => payload,
        }
    }
}

/// Fold an optional ticket reference into the commit message.
///
/// A blank reference contributes nothing; both parts are trimmed.
pub fn compose_commit_message(message: &str, ticket_ref: &str) -> String {
    let message = message.trim();
    let ticket = ticket_ref.trim();
    if ticket.is_empty() {
        message.to_string()
    } else {
        format!("[{}] {}", ticket, message)
    }
}

/// Validate a submission and route it by size.
///
/// Rejects an empty message or empty selection locally, with no boundary
/// round-trip. Ids are sorted so identical selections produce identical
/// requests.
pub fn prepare_submission(
    selection: &SelectionSet,
    message: &str,
    ticket_ref: &str,
    source: &str,
) -> Result<SubmitAction, SubmitError> {
    if message.trim().is_empty() {
        return Err(SubmitError::EmptyMessage);
    }
    if selection.is_empty() {
        return Err(SubmitError::EmptySelection);
    }

    let ids = selection.to_sorted_ids();
    let item_count = ids.len();
    let payload = CommitRequest {
        ids,
        message: compose_commit_message(message, ticket_ref),
        source: source.to_string(),
    };

    if item_count > CONFIRM_THRESHOLD {
        Ok(SubmitAction::Confirm {
            payload,
            item_count,
        })
    } else {
        Ok(SubmitAction::Commit(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftdeck_types::RecordId;

    #[test]
    fn ticket_ref_is_prefixed_in_brackets() {
        assert_eq!(
            compose_commit_message("Fix layout", "US-123"),
            "[US-123] Fix layout"
        );
    }

    #[test]
    fn blank_ticket_ref_is_dropped() {
        assert_eq!(compose_commit_message("Fix layout", "   "), "Fix layout");
        assert_eq!(compose_commit_message("Fix layout", ""), "Fix layout");
    }

    #[test]
    fn message_and_ref_are_trimmed() {
        assert_eq!(
            compose_commit_message("  Fix layout  ", " US-123 "),
            "[US-123] Fix layout"
        );
    }

    #[test]
    fn empty_message_is_rejected_locally() {
        let selection = SelectionSet::from_ids([RecordId::new("1")]);
        assert_eq!(
            prepare_submission(&selection, "   ", "", "prod"),
            Err(SubmitError::EmptyMessage)
        );
    }

    #[test]
    fn empty_selection_is_rejected_locally() {
        assert_eq!(
            prepare_submission(&SelectionSet::new(), "Fix layout", "", "prod"),
            Err(SubmitError::EmptySelection)
        );
    }

    #[test]
    fn small_selection_commits_directly() {
        let selection = SelectionSet::from_ids([RecordId::new("2"), RecordId::new("1")]);
        let action = prepare_submission(&selection, "Fix layout", "US-123", "prod").unwrap();

        match action {
            SubmitAction::Commit(payload) => {
                assert_eq!(payload.ids, vec![RecordId::new("1"), RecordId::new("2")]);
                assert_eq!(payload.message, "[US-123] Fix layout");
                assert_eq!(payload.source, "prod");
            }
            other => panic!("expected direct commit, got {:?}", other),
        }
    }

    #[test]
    fn oversized_selection_routes_through_confirmation() {
        let ids = (0..CONFIRM_THRESHOLD + 1).map(|i| RecordId::new(format!("r{}", i)));
        let selection = SelectionSet::from_ids(ids);

        let action = prepare_submission(&selection, "Bulk sync", "", "prod").unwrap();
        match action {
            SubmitAction::Confirm {
                payload,
                item_count,
            } => {
                assert_eq!(item_count, CONFIRM_THRESHOLD + 1);
                assert_eq!(payload.ids.len(), item_count);
            }
            other => panic!("expected confirmation routing, got {:?}", other),
        }
    }

    #[test]
    fn threshold_itself_commits_directly() {
        let ids = (0..CONFIRM_THRESHOLD).map(|i| RecordId::new(format!("r{}", i)));
        let selection = SelectionSet::from_ids(ids);

        let action = prepare_submission(&selection, "Bulk sync", "", "prod").unwrap();
        assert!(matches!(action, SubmitAction::Commit(_)));
    }
}
