//! # stash-repl
//!
//! The interactive front end for the stash key-value store.
//!
//! Thin glue over [`stash_store::Store`]: a reedline-driven loop that
//! tokenizes each line on whitespace and dispatches to the store.
//!
//! ## Commands
//!
//! - `set <key> <value>` - Store a value under a key
//! - `get <key>` - Print the value stored under a key
//! - `genp <key> [length]` - Generate a strong password and store it
//! - `help` - Show available commands
//! - `exit` - Leave the REPL
//!
//! ## Usage
//!
//! ```bash
//! # Run against the default data.json
//! stash
//!
//! # Inside the REPL:
//! > set greeting hello
//! > get greeting
//! > genp db/root 24
//! ```

pub mod commands;
pub mod repl;

pub use repl::run;
