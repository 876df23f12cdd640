//! reflect CLI: journaling chat, stored reflections and profile. Config from env and `.env`.

use anyhow::{Context, Result};
use clap::Parser;
use reflect_cli::render::write_reflections;
use reflect_cli::{build_service, prompt_login, run_chat, AppConfig, Cli, Commands};
use reflect_core::{init_tracing, UserKey};
use reflect_session::Session;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.log_file, false).context("Initialize logging")?;

    let service = build_service(&config)?;

    match cli.command {
        Commands::Chat { user } => {
            let mut input = BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();
            let session = match user {
                Some(name) => Some(Session::start(&name)?),
                None => prompt_login(&mut input, &mut out).await?,
            };
            match session {
                Some(mut session) => {
                    run_chat(
                        &service,
                        &mut session,
                        &mut input,
                        &mut out,
                        config.typing_delay(),
                    )
                    .await
                }
                None => Ok(()),
            }
        }
        Commands::History { user, limit } => {
            let key = UserKey::parse(&user)?;
            let records = service.recent_reflections(&key, limit).await?;
            write_reflections(&mut std::io::stdout(), &records)?;
            Ok(())
        }
        Commands::Profile { user } => {
            let key = UserKey::parse(&user)?;
            let profile = service.profile(&key).await?;
            println!("{}", profile);
            Ok(())
        }
    }
}
