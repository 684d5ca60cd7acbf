//! Event handling module for keyboard input.
//!
//! Terminal events are translated into `Action`s here; the date picker only
//! ever sees actions.

mod action;
mod handler;
mod keyboard;

pub use action::Action;
pub use handler::EventHandler;
