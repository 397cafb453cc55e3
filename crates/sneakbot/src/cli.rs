use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sneakbot")]
#[command(author, version, about = "Telegram bot that launches the SneakDog mini app", long_about = None)]
pub struct Cli {
    /// Extra dotenv file; its values override .env and the environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Process updates that queued up while the bot was offline
    #[arg(long)]
    pub keep_pending: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
