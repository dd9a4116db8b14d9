//! Config command handler.

use anyhow::Result;
use fragen_core::Settings;

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;

/// Execute the config command.
pub fn execute(ctx: &CliContext, command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(ctx.settings())?);
            } else {
                print!("{}", format_settings(ctx.settings()));
            }
        }
    }
    Ok(())
}

/// Effective settings in `key = value` form.
pub fn format_settings(settings: &Settings) -> String {
    format!(
        "name_prefix = {}\n\
         min_number = {}\n\
         max_number = {}\n\
         number_storage = {}\n\
         base_url = {}\n\
         request_timeout_secs = {}\n\
         strict_templates = {}\n",
        settings.effective_name_prefix(),
        settings.effective_min_number(),
        settings.effective_max_number(),
        settings.effective_number_storage().as_str(),
        settings.effective_base_url(),
        settings.effective_timeout_secs(),
        settings.effective_strict_templates(),
    )
}
