//! BDD step definitions for the homework notifier

pub mod polling_steps;
pub mod status_steps;
pub mod validation_steps;
