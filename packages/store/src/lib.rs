//! # stash-store
//!
//! A minimal persistent key-value store.
//!
//! The [`Store`] holds string key-value pairs in memory behind a
//! reader-writer lock and rewrites a single JSON snapshot file after every
//! mutation. A strong-password generator is layered on top of the normal
//! write path.
//!
//! ## Example
//!
//! ```no_run
//! use stash_store::Store;
//!
//! let store = Store::open("data.json");
//! store.set("greeting", "hello");
//! assert_eq!(store.get("greeting").as_deref(), Some("hello"));
//!
//! store.set_password("db/root", 24).unwrap();
//! assert_eq!(store.get("db/root").unwrap().len(), 24);
//! ```

mod error;
mod password;
mod snapshot;
mod store;

pub use error::Error;
pub use password::{generate_strong_password, MIN_PASSWORD_LENGTH};
pub use store::Store;
