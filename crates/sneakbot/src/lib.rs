//! SneakDog bot - Telegram front door for the SneakDog mini app
//!
//! # Module Structure
//!
//! - `cli`: Command-line arguments
//! - `telegram`: Bot construction, dispatcher schema and handlers

pub mod cli;
pub mod telegram;
