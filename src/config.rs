// src/config.rs

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;

pub const DEFAULT_PORT: u16 = 5000;

/// Request body ceiling for the upload routes (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Backing file of the question store.
    pub questions_file: PathBuf,
    /// Backing file of the result log.
    pub results_file: PathBuf,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub log_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    /// Reads the process environment (and `.env`, if present).
    ///
    /// Invalid values fall back to their defaults. The returned messages
    /// describe each one; logging is not set up yet at this point, so the
    /// caller emits them once it is.
    pub fn from_env() -> (Self, Vec<String>) {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT, &mut warnings);
        let max_upload_bytes = parse_or(
            &lookup,
            "MAX_UPLOAD_BYTES",
            DEFAULT_MAX_UPLOAD_BYTES,
            &mut warnings,
        );

        let questions_file = lookup("QUESTIONS_FILE")
            .unwrap_or_else(|| "questions.json".to_string())
            .into();

        let results_file = lookup("RESULTS_FILE")
            .unwrap_or_else(|| "exam-results.json".to_string())
            .into();

        let upload_dir = lookup("UPLOAD_DIR")
            .unwrap_or_else(|| "uploads".to_string())
            .into();

        let log_dir = lookup("LOG_DIR")
            .unwrap_or_else(|| "logs".to_string())
            .into();

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let config = Self {
            port,
            questions_file,
            results_file,
            upload_dir,
            max_upload_bytes,
            log_dir,
            rust_log,
        };
        (config, warnings)
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    warnings: &mut Vec<String>,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!("Ignoring invalid {}={:?}, using {}", key, raw, default));
            default
        }),
        None => default,
    }
}
