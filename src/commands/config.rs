use alias_d::{config::Config, integration::Integration};
use anyhow::{bail, Result};
use clap::Subcommand;

/// Keys accepted by `config get` and `config set`.
const KEYS: &[&str] = &["dotfile.path", "integration.rc_file", "integration.source_line"];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the stored configuration followed by the values in effect
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Set a value (dotfile.path, integration.rc_file, integration.source_line); "" resets it
    Set { key: String, value: String },
    /// Print the value in effect for a key
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let stored = toml::to_string_pretty(&config)?;
            if !stored.trim().is_empty() {
                println!("{}", stored.trim_end());
                println!();
            }
            println!("# in effect");
            for key in KEYS {
                println!("{key} = {}", config.get_value(key)?);
            }
        }
        ConfigAction::Path => {
            let path = Config::path()?;
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            let path = Config::path()?;
            if path.exists() && !force {
                bail!("{} already exists; pass --force to overwrite it", path.display());
            }
            Config::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => cmd_set(&key, &value)?,
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}

/// Store a value and, when the source line moves, carry the startup script along.
fn cmd_set(key: &str, value: &str) -> Result<()> {
    let before = Config::load()?;
    let mut after = before.clone();
    after.set_value(key, value)?;
    after.save()?;

    if value.is_empty() {
        println!("Reset {key}; now {}", after.get_value(key)?);
    } else {
        println!("Set {key} = {}", after.get_value(key)?);
    }

    let (old_line, new_line) = (before.source_line(), after.source_line());
    if key != "integration.rc_file" && old_line != new_line {
        let integration = Integration::new(before.rc_file()?, old_line);
        match integration.switch_to(&new_line) {
            Ok(true) => eprintln!(
                "Updated {} to use `{new_line}`",
                integration.rc_file().display()
            ),
            Ok(false) => {}
            Err(e) => eprintln!(
                "Warning: could not update {}: {e:#}. Run: alias-d integration enable",
                integration.rc_file().display()
            ),
        }
    }
    Ok(())
}
