//! Module `commands`
//!
//! Defines the console commands, their parsing and their results.

/// Represents a console command parsed from one input line.
#[derive(Debug, PartialEq)]
pub enum Command {
    QUIT,
    HELP,
    LIST,               // Persisted mounts (the UnMount menu)
    BINDINGS,           // Live virtual -> real table
    MOUNT(Vec<String>), // Picked directories, `;` separated
    UNMOUNT(String),    // Root directory of a persisted mount
    OPTIONAL(String),   // Name of a recommended folder
    UNKNOWN,
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a raw input line into the `Command` enum.
///
/// `MOUNT` with no argument is an empty selection, not an error. Commands
/// that need an argument and lack one parse as `UNKNOWN`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "QUIT" | "Q" | "EXIT" => Command::QUIT,
        "HELP" | "?" => Command::HELP,
        "LIST" | "LS" => Command::LIST,
        "BINDINGS" => Command::BINDINGS,
        "MOUNT" => Command::MOUNT(
            arg.split(';')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        "UNMOUNT" if !arg.is_empty() => Command::UNMOUNT(arg.to_string()),
        "OPTIONAL" if !arg.is_empty() => Command::OPTIONAL(arg.to_string()),
        _ => Command::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::QUIT);
        assert_eq!(parse_command("q"), Command::QUIT);
        assert_eq!(parse_command("list"), Command::LIST);
        assert_eq!(parse_command("BINDINGS"), Command::BINDINGS);
        assert_eq!(parse_command("help"), Command::HELP);
    }

    #[test]
    fn test_parse_mount_selection() {
        assert_eq!(
            parse_command("MOUNT D:/External/Foo ; D:/My Packs/Content"),
            Command::MOUNT(vec![
                "D:/External/Foo".to_string(),
                "D:/My Packs/Content".to_string()
            ])
        );
        assert_eq!(parse_command("MOUNT"), Command::MOUNT(vec![]));
        assert_eq!(parse_command("MOUNT ;;"), Command::MOUNT(vec![]));
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("UNMOUNT  D:/External/Foo  "),
            Command::UNMOUNT("D:/External/Foo".to_string())
        );
        assert_eq!(
            parse_command("optional Props"),
            Command::OPTIONAL("Props".to_string())
        );
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(parse_command("UNMOUNT"), Command::UNKNOWN);
        assert_eq!(parse_command("OPTIONAL "), Command::UNKNOWN);
        assert_eq!(parse_command("FORMAT C:"), Command::UNKNOWN);
        assert_eq!(parse_command(""), Command::UNKNOWN);
    }
}
