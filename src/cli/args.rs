// file: src/cli/args.rs
// version: 1.0.0
// guid: 0e5b94c3-7d26-4a81-bf50-8c3e62a9d417

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sf-field-perms")]
#[command(about = "Assign field-level security permissions on a platform object's field")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Operations on platform objects
    Object {
        #[command(subcommand)]
        command: ObjectCommands,
    },
}

#[derive(Subcommand)]
pub enum ObjectCommands {
    /// Operations on an object's fields
    Fields {
        #[command(subcommand)]
        command: FieldsCommands,
    },
}

#[derive(Subcommand)]
pub enum FieldsCommands {
    /// Field-level security permissions
    Permission {
        #[command(subcommand)]
        command: PermissionCommands,
    },
}

#[derive(Subcommand)]
pub enum PermissionCommands {
    /// Assign Read or Edit permission on a field to your profile
    Assign {
        #[arg(short = 'o', long, help = "Object API name")]
        object: String,

        /// Kept as a plain string so level validation happens in the
        /// pipeline, before any session or network use
        #[arg(short = 'p', long, help = "\"Read\" or \"Edit\" permission")]
        permission: String,

        #[arg(short = 'f', long, help = "Field API name")]
        fieldname: String,

        #[arg(long, help = "Path to a JSON auth file (instanceUrl, accessToken, username)")]
        auth_file: Option<String>,
    },
}
