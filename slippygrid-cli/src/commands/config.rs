//! `config` command: inspect and edit `~/.slippygrid/config.ini`.
//!
//! `set` rewrites only the key it is given, so it also repairs a file whose
//! other entries fail validation. `get` and `list` report such a file as an
//! error instead of showing defaults.

use clap::Subcommand;
use slippygrid::config::{config_file_path, update_file, ConfigFile, ConfigKey};
use std::path::Path;

use crate::error::CliError;

const NOT_SET: &str = "(not set)";

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of one setting
    Get {
        /// Setting name as section.key, e.g. map.zoom
        key: String,
    },

    /// Change one setting; an empty value clears map.center and map.url
    Set {
        /// Setting name as section.key, e.g. map.center
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print every setting, grouped by section
    List,

    /// Print the location of the config file
    Path,
}

/// Run a config subcommand against the default config file.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let path = config_file_path();

    let output = match command {
        ConfigCommands::Get { key } => show_value(&path, lookup(&key)?)?,
        ConfigCommands::Set { key, value } => {
            let key = lookup(&key)?;
            let stored = update_file(&path, key, &value)?;
            format!("{} = {}", key.name(), or_not_set(&stored))
        }
        ConfigCommands::List => render_listing(&ConfigFile::load_from(&path)?, &path),
        ConfigCommands::Path => path.display().to_string(),
    };

    println!("{}", output);
    Ok(())
}

fn lookup(name: &str) -> Result<ConfigKey, CliError> {
    name.parse().map_err(|_| {
        CliError::Config(format!(
            "no setting named '{}' (run 'slippygrid config list' for the full set)",
            name
        ))
    })
}

fn show_value(path: &Path, key: ConfigKey) -> Result<String, CliError> {
    let config = ConfigFile::load_from(path)?;
    Ok(or_not_set(&key.get(&config)).to_string())
}

fn or_not_set(value: &str) -> &str {
    if value.is_empty() {
        NOT_SET
    } else {
        value
    }
}

/// INI-style dump of every setting, names aligned within each section.
fn render_listing(config: &ConfigFile, path: &Path) -> String {
    let width = ConfigKey::all()
        .iter()
        .map(|key| key.key_name().len())
        .max()
        .unwrap_or(0);

    let mut sections: Vec<(&str, Vec<String>)> = Vec::new();
    for key in ConfigKey::all() {
        let line = format!(
            "{:<width$} = {}",
            key.key_name(),
            or_not_set(&key.get(config)),
            width = width
        );
        match sections.last_mut() {
            Some((section, lines)) if *section == key.section() => lines.push(line),
            _ => sections.push((key.section(), vec![line])),
        }
    }

    let body: Vec<String> = sections
        .into_iter()
        .map(|(section, lines)| format!("[{}]\n{}", section, lines.join("\n")))
        .collect();

    format!("# {}\n{}", path.display(), body.join("\n\n"))
}
