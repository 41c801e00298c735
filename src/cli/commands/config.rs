use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `rfarelog init`.",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
                let issues = Config::check_yaml(&content);
                if issues.is_empty() {
                    success("Configuration file is complete and valid.");
                } else {
                    for issue in &issues {
                        warning(issue);
                    }
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                _ if editor_to_use != default_editor => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    let status = Command::new(&default_editor)
                        .arg(&path)
                        .status()
                        .map_err(|e| AppError::Config(e.to_string()))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "editor '{}' exited with {}",
                            default_editor, status
                        )));
                    }
                }
                _ => {
                    return Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        editor_to_use
                    )));
                }
            }
        }
    }

    Ok(())
}
