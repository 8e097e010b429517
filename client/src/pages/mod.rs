//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are render targets chosen by the router. Guarding and the app shell
//! are applied around them in `app.rs`, so pages assume their policy holds.

pub mod bot_detail;
pub mod create_bot;
pub mod dashboard;
pub mod docs;
pub mod landing;
pub mod legal;
pub mod not_found;
pub mod profile;
