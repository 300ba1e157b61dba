//! CLI smoke entry point.
//!
//! Usage: `postcat_cli [DB_PATH]`. Opens the database (in-memory when no path
//! is given), applies migrations, checks repository readiness and prints deterministic
//! probe lines.

use postcat_core::db::migrations::current_user_version;
use postcat_core::db::{open_db, open_db_in_memory};
use postcat_core::{SqliteEntityLookup, SqlitePostCategoryRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("postcat_core ping={}", postcat_core::ping());
    println!("postcat_core version={}", postcat_core::core_version());

    match probe(std::env::args().nth(1)) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("postcat_core probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn probe(db_path: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    SqlitePostCategoryRepository::try_new(&conn)?;
    SqliteEntityLookup::try_new(&conn)?;
    Ok(format!(
        "postcat_core schema_version={}",
        current_user_version(&conn)?
    ))
}
