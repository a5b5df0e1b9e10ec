//! Mount manager - Entry Point
//!
//! Maps external directories into the editor's virtual content namespace and
//! remembers them across sessions. This binary drives the engine from a
//! line-oriented console in place of the editor menus.

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use mount_manager::audit::HostIdentity;
use mount_manager::config::AppConfig;
use mount_manager::error::AppError;
use mount_manager::error::handlers::{error_to_exit_code, handle_error};
use mount_manager::host::{LoggingRegistrar, SystemLauncher};
use mount_manager::protocol::{CommandStatus, handle_command, parse_command};
use mount_manager::storage::IniFile;
use mount_manager::{MountService, SharedMountService};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!("Launching mount manager for {}", config.project_dir);

    let plugin_config = IniFile::open(config.plugin_config_path())?;
    let project_config = IniFile::open(config.project_config_path())?;

    let mut service = MountService::new(
        config.service_settings(),
        &plugin_config,
        Box::new(project_config),
        Box::new(LoggingRegistrar),
        Box::new(SystemLauncher),
        HostIdentity::detect(),
    );

    let report = service.startup();
    info!(
        "Startup complete: {:?}, {} mount(s) restored",
        report.method,
        report.replayed.len()
    );

    let service = service.into_shared();
    spawn_interrupt_handler(service.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = parse_command(&line);
        let result = {
            let mut guard = service.lock().await;
            handle_command(&mut guard, &command)
        };

        if let Some(msg) = result.message {
            println!("{}", msg);
        }
        if result.status == CommandStatus::Exit {
            return Ok(());
        }
    }

    // stdin closed without QUIT
    service.lock().await.shutdown();
    Ok(())
}

/// Writes the stop signs when the console is interrupted.
fn spawn_interrupt_handler(service: SharedMountService) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
            return;
        }
        info!("Interrupted, writing stop signs");
        service.lock().await.shutdown();
        std::process::exit(130);
    });
}
