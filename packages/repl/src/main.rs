use std::path::PathBuf;

use clap::Parser;

use stash_store::Store;

/// stash - a minimal persistent key-value store with a password generator
#[derive(Parser, Debug)]
#[command(name = "stash")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the JSON file the store persists to
    #[arg(long, default_value = "data.json")]
    file: PathBuf,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Some(parent) = args.file.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create {}: {}", parent.display(), e);
                std::process::exit(1);
            }
        }
    }

    let store = Store::open(args.file);

    if let Err(e) = stash_repl::run(&store) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
