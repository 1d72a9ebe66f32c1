use anyhow::Result;
use cli::Command;
use pm_widgets::config::Config;
use pm_widgets::constants::CONFIG_GENERATED;
use pm_widgets::logger::{self, Logger};
use pm_widgets::ui;

mod cli {
    /// What the binary was asked to do
    pub enum Command {
        Run,
        GenerateConfig,
        Help,
    }

    pub fn parse(args: impl Iterator<Item = String>) -> Command {
        let mut command = Command::Run;
        for arg in args {
            match arg.as_str() {
                "--generate-config" => command = Command::GenerateConfig,
                "-h" | "--help" => return Command::Help,
                _ => {}
            }
        }
        command
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    match cli::parse(std::env::args().skip(1)) {
        Command::Help => {
            println!("pm-widgets: terminal gallery of project management widgets\n");
            println!("Usage: pm-widgets [--generate-config]\n");
            println!("  --generate-config  Write a default config to the XDG config directory");
            return Ok(());
        }
        Command::GenerateConfig => {
            let path = Config::get_default_config_path()?;
            Config::generate_default_config(&path)?;
            println!("{}: {}", CONFIG_GENERATED, path.display());
            return Ok(());
        }
        Command::Run => {}
    }

    let config = Config::load()?;

    let memory = Logger::new();
    if let Some(path) = logger::init(&config.logging, memory.clone())? {
        log::info!("Writing logs to {}", path.display());
    }

    ui::run_app(&config, memory).await?;

    Ok(())
}
