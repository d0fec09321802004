use std::path::Path;

use anyhow::Context;

const SECRETS_FILE: &str = ".secrets.env";

/// Which env files were applied. Tracing is not installed yet when these are
/// read, so the caller logs the outcome afterwards.
#[derive(Debug, Default)]
pub struct EnvReport {
    pub profile: String,
    pub loaded: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

fn env_files(profile: &str) -> [&'static str; 3] {
    match profile {
        "production" => ["config/common.env", "config/prod.env", SECRETS_FILE],
        _ => ["config/common.env", "config/dev.env", SECRETS_FILE],
    }
}

/// Applies the env files for `ROCKET_PROFILE` in order; later files win.
/// A missing file is skipped, an unreadable one is an error.
pub fn load_environment() -> anyhow::Result<EnvReport> {
    let profile = dotenvy::var("ROCKET_PROFILE").unwrap_or("development".to_string());
    let mut report = EnvReport {
        profile,
        ..EnvReport::default()
    };

    for path in env_files(&report.profile) {
        if !Path::new(path).exists() {
            report.missing.push(path);
            continue;
        }

        dotenvy::from_filename_override(path)
            .with_context(|| format!("failed to load environment file {}", path))?;
        report.loaded.push(path);
    }

    Ok(report)
}
