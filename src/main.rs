use rosterdb::config;
use rosterdb::core::Result;
use rosterdb::menu::Menu;
use rosterdb::store::StudentStore;
use std::io;
use std::path::Path;
use tracing::info;

const DEFAULT_DB_PATH: &str = "students.db";
const CONFIG_PATH: &str = "roster.toml";

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting rosterdb...");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // An absent config file is not an error; defaults apply
    let db_path = if Path::new(CONFIG_PATH).exists() {
        let config = config::load_config(CONFIG_PATH)?;
        config
            .database
            .and_then(|database| database.path)
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
    } else {
        DEFAULT_DB_PATH.to_string()
    };

    let store = StudentStore::open(&db_path)?;
    // Fresh start every run: drop, recreate, and reseed the roster
    store.init_schema()?;
    store.seed()?;
    info!("Roster initialized at {}", db_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&store, stdin.lock(), stdout.lock());
    menu.run()?;

    println!("\nDone. {} saved successfully.", db_path);
    Ok(())
}
