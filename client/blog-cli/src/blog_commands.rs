use clap::Subcommand;

#[derive(Subcommand)]
pub enum BlogCommands {
    /// List posts
    List {
        /// Only posts whose id, title, content or owner id contain this text
        #[arg(long)]
        search: Option<String>,
        /// Print a text table instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Get a post by ID
    Get { id: i64 },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Update a post; omitted fields keep their current value
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a post
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
