use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "yasik", version, about = "Late-night snack recommendation chatbot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Enter the interactive terminal chat (default)
    Chat {
        /// Start the session with this system prompt instead of the configured one
        #[arg(short, long)]
        system_prompt: Option<String>,
    },

    /// Start the multi-session HTTP API
    Serve,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Chat { system_prompt: None }
    }
}
