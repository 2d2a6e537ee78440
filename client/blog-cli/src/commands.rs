use crate::blog_commands::BlogCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the credential
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account (does not sign in)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored credential
    Logout,

    /// Show who the stored credential belongs to
    Whoami,

    /// Follow sign-in changes made by other processes until interrupted
    Watch,

    /// Blog post operations
    Blog {
        #[command(subcommand)]
        action: BlogCommands,
    },
}
