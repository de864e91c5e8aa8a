//! Profile CLI commands

use clap::Subcommand;

use crate::error::FintrackResult;
use crate::storage::ProfileStore;

use super::AppContext;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List profiles found on disk
    List,

    /// Create a profile (first use also creates one implicitly)
    Create {
        /// Profile name
        name: String,
    },

    /// Delete a profile and its data
    Delete {
        /// Profile name
        name: String,
    },

    /// Set the default profile used when --profile is not given
    Default {
        /// Profile name
        name: String,
    },
}

/// Handle a profile command
pub fn handle_profile_command(ctx: &AppContext, cmd: ProfileCommands) -> FintrackResult<()> {
    match cmd {
        ProfileCommands::List => {
            let profiles = ctx.store.list()?;
            if profiles.is_empty() {
                println!("No profiles yet.");
            } else {
                for name in profiles {
                    if name == ctx.profile {
                        println!("{} (active)", name);
                    } else {
                        println!("{}", name);
                    }
                }
            }
        }

        ProfileCommands::Create { name } => {
            ProfileStore::validate_name(&name)?;
            if ctx.store.exists(&name) {
                println!("Profile '{}' already exists.", name);
            } else {
                let mut book = crate::models::AccountBook::new();
                book.currency = ctx.settings.currency_symbol.clone();
                ctx.store.save(&name, &book)?;
                println!("Created profile '{}'.", name);
            }
        }

        ProfileCommands::Delete { name } => {
            ctx.store.delete(&name)?;
            println!("Deleted profile '{}'.", name);
        }

        ProfileCommands::Default { name } => {
            ProfileStore::validate_name(&name)?;
            let mut settings = ctx.settings.clone();
            settings.default_profile = Some(name.clone());
            settings.save(&ctx.paths)?;
            println!("Default profile set to '{}'.", name);
        }
    }

    Ok(())
}
