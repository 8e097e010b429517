//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell and route guard while reading
//! shared state from Leptos context providers.

pub mod guard;
pub mod layout;
