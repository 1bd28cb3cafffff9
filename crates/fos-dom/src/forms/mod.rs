//! Form Elements Module
//!
//! Control classification and the host constraint validation API.

mod control;
mod validation;

pub use control::{ControlKind, InputType, SelectedFile};
pub use validation::{Step, ValidationConstraints, ValidityState};
