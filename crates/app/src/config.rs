use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use lingo_core::model::Language;

pub const DEFAULT_DB_URL: &str = "sqlite://flashcards.sqlite3";
const MEMORY_URL: &str = "sqlite::memory:";

/// Language flashcards in the terminal, with progress saved per user and language.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// SQLite database URL or file path
    #[arg(long = "db", env = "FLASHCARDS_DB_URL", default_value = DEFAULT_DB_URL, global = true)]
    pub db_url: String,

    /// keep progress in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// study interactively (default)
    Study,
    /// print the dashboard for a saved user without logging in
    Stats {
        #[arg(long)]
        user: String,
        #[arg(long, default_value_t = Language::Spanish)]
        language: Language,
    },
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Study)
    }
}

#[derive(Debug)]
pub enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Turn a bare or relative path into an absolute `sqlite://` URL.
///
/// # Errors
///
/// Returns `ArgsError::InvalidDbUrl` for a blank value.
pub fn normalize_sqlite_url(raw: &str) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: raw.to_owned(),
        });
    }
    if trimmed == MEMORY_URL || trimmed.starts_with("sqlite://") {
        return Ok(trimmed.to_owned());
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    Ok(format!("sqlite://{}", absolute.display()))
}

/// Create the database file and its parent directory so the pool can open it.
///
/// # Errors
///
/// Returns an error for a URL without a path or if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == MEMORY_URL {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_owned(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_owned(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_study() {
        let cli = Cli::parse_from(["flashcards", "--db", DEFAULT_DB_URL]);
        assert_eq!(cli.command(), Command::Study);
        assert!(!cli.in_memory);
    }

    #[test]
    fn stats_subcommand_parses_language() {
        let cli = Cli::parse_from(["flashcards", "stats", "--user", "ana", "--language", "German"]);
        assert_eq!(
            cli.command(),
            Command::Stats {
                user: "ana".into(),
                language: Language::German,
            }
        );

        let cli = Cli::parse_from(["flashcards", "stats", "--user", "ana"]);
        assert!(matches!(
            cli.command(),
            Command::Stats {
                language: Language::Spanish,
                ..
            }
        ));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = Cli::try_parse_from(["flashcards", "stats", "--user", "ana", "--language", "klingon"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn normalize_keeps_full_urls() {
        assert_eq!(normalize_sqlite_url(" sqlite::memory: ").unwrap(), MEMORY_URL);
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/cards.db").unwrap(),
            "sqlite:///tmp/cards.db"
        );
        assert!(normalize_sqlite_url("  ").is_err());
    }

    #[test]
    fn normalize_makes_paths_absolute() {
        let url = normalize_sqlite_url("sqlite:data/cards.db").unwrap();
        let path = url.strip_prefix("sqlite://").unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("data/cards.db"));
    }

    #[test]
    fn prepare_creates_file_and_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("cards.sqlite3");
        let url = normalize_sqlite_url(file.to_str().unwrap()).unwrap();

        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        prepare_sqlite_file(&url).unwrap();

        assert!(prepare_sqlite_file("sqlite://").is_err());
        assert!(prepare_sqlite_file("postgres://x").is_err());
        prepare_sqlite_file(MEMORY_URL).unwrap();
    }
}
