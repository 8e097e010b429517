//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decision logic lives here as pure functions over plain inputs so it can be
//! tested without a renderer or a browser location.

pub mod guard;
pub mod nav;
