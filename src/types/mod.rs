//! Core types for Jarvis.

pub mod message;

pub use message::*;
