//! Interaction implementations.

mod scripted;

pub use scripted::ScriptedInteraction;
