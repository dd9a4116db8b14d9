//! Env command handler.
//!
//! Inspects and edits the environment file directly.

use anyhow::Result;
use fragen_core::{EnvValue, Environment, EnvironmentStore};

use crate::bootstrap::CliContext;
use crate::env_commands::EnvCommand;
use crate::error::CliError;

/// Execute the env command.
pub async fn execute(ctx: &CliContext, command: EnvCommand) -> Result<()> {
    match command {
        EnvCommand::Show { json } => {
            let env = ctx.repository().load().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&env)?);
            } else {
                print!("{}", format_listing(&env));
            }
        }
        EnvCommand::Get { key } => println!("{}", get(ctx, &key).await?),
        EnvCommand::Set { key, value, number } => {
            let value = parse_value(&value, number)?;
            set(ctx, &key, value).await?;
            println!("✓ {key} updated in {}", ctx.repository().location());
        }
        EnvCommand::Unset { key } => {
            if unset(ctx, &key).await? {
                println!("✓ {key} removed from {}", ctx.repository().location());
            } else {
                println!("{key} was not set");
            }
        }
        EnvCommand::Clear => {
            let removed = clear(ctx).await?;
            println!("✓ Removed {removed} variable(s) from {}", ctx.repository().location());
        }
    }
    Ok(())
}

/// One `key=value` line per entry; disabled entries are commented out.
pub fn format_listing(env: &Environment) -> String {
    env.entries()
        .iter()
        .map(|entry| {
            let marker = if entry.enabled { "" } else { "# " };
            format!("{marker}{}={}\n", entry.key, entry.value)
        })
        .collect()
}

fn parse_value(raw: &str, number: bool) -> Result<EnvValue, CliError> {
    if !number {
        return Ok(EnvValue::from(raw));
    }
    raw.trim()
        .parse::<i64>()
        .map(EnvValue::Number)
        .map_err(|_| CliError::Usage(format!("'{raw}' is not an integer")))
}

pub async fn get(ctx: &CliContext, key: &str) -> Result<EnvValue> {
    let env = ctx.repository().load().await?;
    env.get(key)
        .ok_or_else(|| CliError::Data(format!("'{key}' is not set in {}", ctx.repository().location())).into())
}

pub async fn set(ctx: &CliContext, key: &str, value: EnvValue) -> Result<()> {
    if key.trim().is_empty() {
        return Err(CliError::Usage("variable name must not be empty".to_string()).into());
    }
    let mut env = ctx.repository().load().await?;
    env.set(key, value);
    ctx.repository().save(&env).await?;
    Ok(())
}

pub async fn unset(ctx: &CliContext, key: &str) -> Result<bool> {
    let mut env = ctx.repository().load().await?;
    let removed = env.unset(key);
    if removed {
        ctx.repository().save(&env).await?;
    }
    Ok(removed)
}

/// Remove every variable. Returns how many there were.
pub async fn clear(ctx: &CliContext) -> Result<usize> {
    let mut env = ctx.repository().load().await?;
    let count = env.len();
    env.clear();
    ctx.repository().save(&env).await?;
    Ok(count)
}
