mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use button_webserver::AppConfig;
use button_webserver::application::use_cases::{
    RunApplicationUseCase, ShowSystemInfoUseCase, StartupError,
};
use button_webserver::debug::{DebugConfig, init_logging};
use button_webserver::infrastructure::storage::LocalFilesystem;
use button_webserver::infrastructure::system::{LinuxNetworkLink, LinuxPlatform, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let debug_config = if cli.production {
        DebugConfig::production()
    } else if cli.verbose {
        DebugConfig::development()
    } else {
        DebugConfig::default()
    };
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli.command {
        Commands::Run(args) => {
            let flash_device = args.flash_device.clone();
            let config = AppConfig::from(args);
            info!("Starting application...");

            // Dependency injection
            let filesystem = Arc::new(LocalFilesystem::new(config.server.root.clone()));
            let platform = Arc::new(LinuxPlatform::new(flash_device));
            let network = Arc::new(LinuxNetworkLink::new(config.network.interface.clone()));
            let clock = Arc::new(SystemClock::new());

            let use_case = RunApplicationUseCase::new(filesystem, platform, network, clock);

            match use_case.execute(&config).await {
                Ok(_) => {
                    info!("Application terminated normally");
                }
                Err(StartupError::RestartRequired(reason)) => {
                    // the service supervisor restarts us
                    error!("Restarting device service: {}", reason);
                    eprintln!("❌ Restarting: {}", reason);
                    std::process::exit(2);
                }
                Err(e) => {
                    error!("Application failed: {}", e);
                    eprintln!("❌ Application failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Info {
            root,
            flash_device,
            list,
        } => {
            let use_case = ShowSystemInfoUseCase::new(
                Arc::new(LocalFilesystem::new(root)),
                Arc::new(LinuxPlatform::new(flash_device)),
            );
            use_case.execute(list);
        }
    }

    Ok(())
}
