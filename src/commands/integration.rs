use alias_d::{config::Config, integration::Integration};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum IntegrationAction {
    /// Source the dotfile from the startup script
    Enable,
    /// Comment out the source line in the startup script
    Disable,
    /// Check whether the startup script sources the dotfile
    Status,
}

pub fn cmd_integration(action: IntegrationAction) -> Result<()> {
    let integration = Integration::from_config(&Config::load()?)?;
    let rc = integration.rc_file().display();

    match action {
        IntegrationAction::Enable => {
            if integration.enable()? {
                eprintln!("Added `{}` to {rc}", integration.source_line());
                eprintln!("Open a new shell or run: {}", integration.source_line());
            } else {
                eprintln!("Already enabled in {rc}");
            }
        }
        IntegrationAction::Disable => {
            if integration.disable()? {
                eprintln!("Commented out `{}` in {rc}", integration.source_line());
            } else {
                eprintln!("Already disabled in {rc}");
            }
        }
        IntegrationAction::Status => println!("{}", integration.status()?),
    }
    Ok(())
}
