//! SneakDog web - serves the game page and receives highscores
//!
//! # Module Structure
//!
//! - `cli`: Command-line arguments
//! - `page`: Game page loading
//! - `web_server`: Router, handlers and server loop

pub mod cli;
pub mod page;
pub mod web_server;

pub use page::GamePage;
pub use web_server::{create_router, run_server, ScoreSubmission, WebState};
