use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::config::{API_KEY_VAR, API_URL_VAR, AppConfig, MODEL_VAR};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the effective configuration (secrets masked).
    Show,
}

pub fn run(config: &AppConfig, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(config, &mut io::stdout()),
    }
}

fn run_show<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<()> {
    writeln!(out, "Workspace: {}", config.workspace_root.display())?;
    writeln!(out, "API URL ({API_URL_VAR}): {}", config.api_url)?;
    writeln!(out, "Model ({MODEL_VAR}): {}", config.model)?;
    writeln!(
        out,
        "API key ({API_KEY_VAR}): {}",
        mask_secret(&config.api_key)
    )?;
    Ok(())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn masks_long_and_short_secrets() {
        assert_eq!(mask_secret(&Some("sk-or-v1-abcdef".to_string())), "sk-***def");
        assert_eq!(mask_secret(&Some("abc".to_string())), "***");
        assert_eq!(mask_secret(&None), "<not set>");
    }

    #[test]
    fn show_never_prints_the_full_key() {
        let config = AppConfig::from_lookup(Path::new("/work"), |name| {
            (name == API_KEY_VAR).then(|| "sk-or-v1-secretvalue".to_string())
        });
        let mut out = Vec::new();
        run_show(&config, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert!(printed.contains("Workspace: /work"));
        assert!(printed.contains("sk-***lue"));
        assert!(!printed.contains("secretvalue"));
        assert!(printed.contains(crate::config::DEFAULT_MODEL));
    }
}
