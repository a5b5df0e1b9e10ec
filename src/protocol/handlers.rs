//! Command handlers
//!
//! Dispatches console commands to the mount service and renders the outcome
//! as text.

use crate::protocol::{Command, CommandResult, CommandStatus};
use crate::registry::{PersistStatus, UnmountStatus};
use crate::service::{MountService, RegisterOutcome};

const HELP_TEXT: &str = "\
MOUNT <dir>[;<dir>...]  mount picked directories
UNMOUNT <root>          forget a persisted mount
OPTIONAL <name>         mount a recommended folder
LIST                    persisted mounts
BINDINGS                live virtual -> real bindings
QUIT                    write stop signs and exit";

/// Dispatches a parsed command to its handler.
pub fn handle_command(service: &mut MountService, command: &Command) -> CommandResult {
    match command {
        Command::QUIT => handle_cmd_quit(service),
        Command::HELP => success(HELP_TEXT.to_string()),
        Command::LIST => handle_cmd_list(service),
        Command::BINDINGS => handle_cmd_bindings(service),
        Command::MOUNT(paths) => handle_cmd_mount(service, paths),
        Command::UNMOUNT(root) => handle_cmd_unmount(service, root),
        Command::OPTIONAL(name) => handle_cmd_optional(service, name),
        Command::UNKNOWN => CommandResult {
            status: CommandStatus::Failure("Unknown command".into()),
            message: Some("Unknown command, try HELP".into()),
        },
    }
}

fn success(message: String) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: Some(message),
    }
}

fn handle_cmd_quit(service: &mut MountService) -> CommandResult {
    let signs = service.shutdown();
    CommandResult {
        status: CommandStatus::Exit,
        message: Some(format!("Goodbye ({} stop signs)", signs.len())),
    }
}

fn handle_cmd_list(service: &MountService) -> CommandResult {
    if service.records().is_empty() {
        return success("No persisted mounts".into());
    }
    let lines: Vec<String> = service
        .records()
        .iter()
        .map(|record| format!("{}  [{}]", record.root_dir(), record.sub_dirs().join(", ")))
        .collect();
    success(lines.join("\n"))
}

fn handle_cmd_bindings(service: &MountService) -> CommandResult {
    let bindings = service.bindings();
    if bindings.is_empty() {
        return success("No live bindings".into());
    }
    let lines: Vec<String> = bindings
        .iter()
        .map(|b| format!("{} -> {}", b.virtual_path, b.real_path))
        .collect();
    success(lines.join("\n"))
}

fn handle_cmd_mount(service: &mut MountService, paths: &[String]) -> CommandResult {
    if paths.is_empty() {
        return success("No directory selected".into());
    }
    let lines: Vec<String> = service
        .mount_selection(paths)
        .iter()
        .map(describe_mount)
        .collect();
    success(lines.join("\n"))
}

fn handle_cmd_optional(service: &mut MountService, name: &str) -> CommandResult {
    match service.mount_optional(name) {
        Some(outcome) => success(describe_mount(&outcome)),
        None => CommandResult {
            status: CommandStatus::Failure(format!("No optional folder {}", name)),
            message: Some(format!("No optional folder named {}", name)),
        },
    }
}

fn handle_cmd_unmount(service: &mut MountService, root: &str) -> CommandResult {
    match service.unmount(root).status {
        UnmountStatus::Removed(record) => success(format!(
            "Unmounted {} (bindings stay live until restart)",
            record.root_dir()
        )),
        UnmountStatus::NotFound => CommandResult {
            status: CommandStatus::Failure(format!("Not mounted: {}", root)),
            message: Some(format!("{} is not mounted", root)),
        },
    }
}

fn describe_mount(outcome: &RegisterOutcome) -> String {
    let saved = match outcome.persisted {
        Some(PersistStatus::Inserted) => "saved",
        Some(PersistStatus::Duplicate) => "already saved",
        None => "not saved",
    };
    format!(
        "{}: {} binding(s), {}",
        outcome.path,
        outcome.plan.bindings.len(),
        saved
    )
}
