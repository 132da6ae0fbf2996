//! Domain types and pure logic for the roiwiz assessment wizard.
//!
//! This crate owns everything that does not touch a terminal or a network
//! socket: the static intake catalog, the mutable form state and its
//! reducer, the wizard step machine, the report wire model and renderer,
//! the HTML export, and the layered configuration loader.

pub mod catalog;
pub mod config;
pub mod export;
pub mod form;
pub mod report;
pub mod wizard;

pub use config::{Config, ConfigError, DepartmentSource};
pub use form::{FieldValue, FormField, FormState};
pub use report::{ReportData, ReportDocument};
pub use wizard::{AdvanceScheduler, ScheduledAdvance, WizardStep};
