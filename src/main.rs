use clap::Parser;
use env_logger::Env;
use legalease::{cli, config, error, save, shell, HttpBackend};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use save::DirectorySink;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let mut config = Config::load()?;
    if let Some(base) = &cli.api_base {
        config.api_base = base.trim().trim_end_matches('/').to_string();
    }
    log::debug!("backend: {}", config.api_base);

    match cli.command.unwrap_or(Commands::Shell { output: None }) {
        Commands::Shell { output } => {
            let backend = HttpBackend::from_config(&config)?;
            let dir = output.unwrap_or_else(|| config.resolve_download_dir());
            shell::Shell::new(&backend, DirectorySink::new(dir)).run().await?;
        }

        Commands::Types { remote } => {
            print!("{}", shell::render_catalog());

            if remote {
                let backend = HttpBackend::from_config(&config)?;
                let differences = shell::compare_remote_catalog(&backend).await?;
                if differences.is_empty() {
                    println!("\n✔ Server catalog matches");
                } else {
                    println!("\n⚠ Server catalog differs:");
                    for difference in differences {
                        println!("  {}", difference);
                    }
                }
            }
        }

        Commands::Generate { document_type, fields, download, output } => {
            println!("⚖️  legalease - generate\n");
            let backend = HttpBackend::from_config(&config)?;
            let sink = download.then(|| {
                DirectorySink::new(output.unwrap_or_else(|| config.resolve_download_dir()))
            });
            shell::generate_once(&backend, &document_type, &fields, sink).await?;
        }

        Commands::Upload { file } => {
            println!("⚖️  legalease - upload & analyze\n");
            let backend = HttpBackend::from_config(&config)?;
            shell::upload_once(&backend, &file).await?;
        }

        Commands::Config { set_api_base, show } => {
            if let Some(base) = set_api_base {
                config.set_api_base(base)?;
                println!("✔ API base set to {}", config.api_base);
            }

            if show {
                println!("Config: {}", Config::config_path()?.display());
                println!("  API base: {}", config.api_base);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Downloads: {}", config.resolve_download_dir().display());
            }
        }
    }

    Ok(())
}
