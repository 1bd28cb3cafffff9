//! fOS Forms
//!
//! Declarative validation feedback on top of the platform's constraint
//! validation. Controls opt in through their native validation attributes;
//! the engine derives a message per control, mirrors the outcome into
//! `aria-invalid` and a message element, and gates submit buttons on
//! overall form validity. Submission itself is never intercepted.
//!
//! # Example
//! ```rust,ignore
//! use fos_dom::DomEvent;
//! use fos_forms::{Config, ValidationEngine};
//!
//! let mut doc = fos_html::parse(html)?;
//! let mut engine = ValidationEngine::new(Config::default());
//! engine.discover(&mut doc);
//!
//! doc.set_value(email, "ada@example.com");
//! engine.dispatch(&mut doc, &DomEvent::input(email));
//! ```

mod accept;
mod config;
mod engine;
mod error;
mod host;
mod kind;
pub mod discovery;
pub mod gating;
pub mod resolver;
pub mod sync;

pub use accept::AcceptFilter;
pub use config::Config;
pub use engine::{ControlBinding, Listener, RegistrationReport, ValidationEngine};
pub use error::ConfigWarning;
pub use host::FormHost;
pub use kind::{SUCCESS_ATTR, ValidityKind};
pub use resolver::{ConfirmRelation, Decision, ValidationState, resolve};
pub use sync::{ARIA_INVALID, apply, displayed_state};
pub use gating::update_gating;
