//! Assertions for the legacy clipboard route.

use crate::clipboard::{DomStep, RecordingDocument};

/// Assert that the document went through one full legacy copy of `value`
/// and that nothing is left attached.
pub fn assert_legacy_copy_sequence(document: &RecordingDocument, value: &str, succeeded: bool) {
    let expected = vec![
        DomStep::Create,
        DomStep::SetValue(value.to_string()),
        DomStep::HideOffScreen,
        DomStep::Attach,
        DomStep::Focus,
        DomStep::SelectAll,
        DomStep::ExecCopy { succeeded },
        DomStep::Remove,
    ];
    assert_eq!(document.steps(), expected, "unexpected DOM sequence");
    assert_no_attached_elements(document);
}

pub fn assert_no_attached_elements(document: &RecordingDocument) {
    assert_eq!(
        document.attached_count(),
        0,
        "temporary text area left attached: {:?}",
        document.steps()
    );
}
