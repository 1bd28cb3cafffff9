//! Configuration warnings
//!
//! Markup problems found while wiring or resolving a control. None of them
//! is fatal: the affected control stays unmanaged or keeps its last state.

use fos_dom::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("control {control} references message target {reference:?}, which does not exist")]
    MissingMessageTarget { control: NodeId, reference: String },

    #[error("control {control} has an empty {attribute} attribute")]
    EmptyReference { control: NodeId, attribute: String },

    #[error("confirm origin {selector:?} of control {control} not found")]
    MissingConfirmOrigin { control: NodeId, selector: String },

    #[error("submit-gated control {control} is a <{tag}>, not a submit button")]
    InvalidSubmitControl { control: NodeId, tag: String },
}

impl ConfigWarning {
    /// The control or submit element the warning is about
    pub fn control(&self) -> NodeId {
        match self {
            Self::MissingMessageTarget { control, .. }
            | Self::EmptyReference { control, .. }
            | Self::MissingConfirmOrigin { control, .. }
            | Self::InvalidSubmitControl { control, .. } => *control,
        }
    }
}
