// file: src/main.rs
// version: 1.0.0
// guid: 5d91c06e-3a47-4b82-9f60-1e84b72d5c39

//! sf-field-perms - Main entry point

use clap::Parser;
use colored::Colorize;
use sf_field_perms::{
    cli::{
        args::{Cli, Commands, FieldsCommands, ObjectCommands, PermissionCommands},
        commands::assign_permission_command,
    },
    logging::logger,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Object {
            command:
                ObjectCommands::Fields {
                    command:
                        FieldsCommands::Permission {
                            command:
                                PermissionCommands::Assign {
                                    object,
                                    permission,
                                    fieldname,
                                    auth_file,
                                },
                        },
                },
        } => assign_permission_command(&object, &permission, &fieldname, auth_file.as_deref()).await,
    };

    if let Err(err) = result {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}
