//! REPL command parsing and execution.
//!
//! Commands:
//! - `set <key> <value>` - Store a value under a key
//! - `get <key>` - Print the value stored under a key
//! - `genp <key> [length]` - Generate a strong password and store it
//! - `help` - Show help
//! - `exit` - Exit the REPL

use stash_store::{Store, MIN_PASSWORD_LENGTH};

/// Result of executing a command
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command failed with an error message
    Error(String),
    /// User requested to exit
    Exit,
    /// Show help
    Help,
}

impl CommandResult {
    /// Create a simple Ok result with display text
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    /// Create an Ok result with no output
    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Parse and execute a command against the store
pub fn execute(input: &str, store: &Store) -> CommandResult {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return CommandResult::ok_none();
    };

    match command {
        "set" => match args {
            [key, value] => {
                store.set(key, value);
                CommandResult::ok_none()
            }
            _ => CommandResult::Error("Usage: set <key> <value>".to_string()),
        },

        "get" => match args {
            [key] => match store.get(key) {
                Some(value) => CommandResult::ok_display(value),
                None => CommandResult::ok_display("key not found"),
            },
            _ => CommandResult::Error("Usage: get <key>".to_string()),
        },

        "genp" => match args {
            [key] => generate_password(store, key, MIN_PASSWORD_LENGTH),
            [key, length] => match length.parse::<usize>() {
                Ok(length) => generate_password(store, key, length),
                Err(_) => CommandResult::Error(format!("length must be an integer: {}", length)),
            },
            _ => CommandResult::Error("Usage: genp <key> [length]".to_string()),
        },

        "help" => CommandResult::Help,

        "exit" => CommandResult::Exit,

        _ => CommandResult::Error(format!("unknown command: {}", command)),
    }
}

fn generate_password(store: &Store, key: &str, length: usize) -> CommandResult {
    match store.set_password(key, length) {
        Ok(()) => {
            CommandResult::ok_display(format!("generated {}-character password at {}", length, key))
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

/// Format the help text shown by the `help` command
pub fn format_help() -> String {
    format!(
        "\
Commands:
  set <key> <value>    Store a value under a key
  get <key>            Print the value stored under a key
  genp <key> [length]  Generate a strong password and store it under a key
                       (length defaults to {}, the minimum)
  help                 Show this help
  exit                 Leave the REPL",
        MIN_PASSWORD_LENGTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestStore {
        _dir: tempfile::TempDir,
        store: Store,
    }

    impl TestStore {
        fn new() -> TestStore {
            let dir = tempfile::tempdir().unwrap();
            let store = Store::open(dir.path().join("data.json"));
            TestStore { _dir: dir, store }
        }
    }

    fn display_of(result: CommandResult) -> Option<String> {
        match result {
            CommandResult::Ok { display } => display,
            CommandResult::Error(msg) => panic!("unexpected error: {}", msg),
            _ => panic!("unexpected non-Ok result"),
        }
    }

    fn error_of(result: CommandResult) -> String {
        match result {
            CommandResult::Error(msg) => msg,
            _ => panic!("expected an error result"),
        }
    }

    #[test]
    fn empty_input_is_a_silent_ok() {
        let t = TestStore::new();
        assert!(display_of(execute("", &t.store)).is_none());
        assert!(display_of(execute("   ", &t.store)).is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let t = TestStore::new();
        assert!(display_of(execute("set greeting hello", &t.store)).is_none());
        assert_eq!(
            display_of(execute("get greeting", &t.store)).as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn get_on_absent_key_reports_not_found() {
        let t = TestStore::new();
        assert_eq!(
            display_of(execute("get nothing", &t.store)).as_deref(),
            Some("key not found")
        );
    }

    #[test]
    fn set_arity_errors_show_usage() {
        let t = TestStore::new();
        assert!(error_of(execute("set", &t.store)).starts_with("Usage: set"));
        assert!(error_of(execute("set onlykey", &t.store)).starts_with("Usage: set"));
        assert!(error_of(execute("set key too many", &t.store)).starts_with("Usage: set"));
    }

    #[test]
    fn get_arity_errors_show_usage() {
        let t = TestStore::new();
        assert!(error_of(execute("get", &t.store)).starts_with("Usage: get"));
        assert!(error_of(execute("get a b", &t.store)).starts_with("Usage: get"));
    }

    #[test]
    fn genp_defaults_to_the_minimum_length() {
        let t = TestStore::new();
        let message = display_of(execute("genp secret", &t.store)).unwrap();
        assert!(message.contains("16"));

        let stored = t.store.get("secret").unwrap();
        assert_eq!(stored.len(), MIN_PASSWORD_LENGTH);
    }

    #[test]
    fn genp_honors_an_explicit_length() {
        let t = TestStore::new();
        execute("genp secret 24", &t.store);
        assert_eq!(t.store.get("secret").unwrap().len(), 24);
    }

    #[test]
    fn genp_below_the_floor_reports_the_validation_error() {
        let t = TestStore::new();
        let message = error_of(execute("genp secret 8", &t.store));
        assert!(message.contains("at least 16"));
        assert_eq!(t.store.get("secret"), None);
    }

    #[test]
    fn genp_rejects_a_non_numeric_length() {
        let t = TestStore::new();
        let message = error_of(execute("genp secret long", &t.store));
        assert!(message.contains("must be an integer"));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let t = TestStore::new();
        let message = error_of(execute("frobnicate", &t.store));
        assert!(message.contains("unknown command"));
        assert!(message.contains("frobnicate"));
    }

    #[test]
    fn exit_and_help_map_to_their_results() {
        let t = TestStore::new();
        assert!(matches!(execute("exit", &t.store), CommandResult::Exit));
        assert!(matches!(execute("help", &t.store), CommandResult::Help));
    }
}
