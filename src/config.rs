use crate::constants::{ENV_FILE, ENV_NEEDLE, LIBRECHAT_CONFIG_FILE, LIBRECHAT_CONFIG_NEEDLE};
use colored::Colorize;
use std::{fs, io::ErrorKind, path::Path};

/// Checks the two files LibreChat reads its endpoint wiring from. Both are
/// inspected even if the first one has problems.
pub fn verify_local_config() -> bool {
    println!("{} local configuration...", "»".bold().cyan());
    let yaml_ok = check_config_file(
        Path::new(LIBRECHAT_CONFIG_FILE),
        LIBRECHAT_CONFIG_NEEDLE,
    );
    let env_ok = check_config_file(Path::new(ENV_FILE), ENV_NEEDLE);
    yaml_ok && env_ok
}

/// A missing file or a missing needle is a warning, not a failure; only an
/// unexpected read error (permissions, a directory in the way) fails the step.
pub fn check_config_file(path: &Path, needle: &str) -> bool {
    match fs::read_to_string(path) {
        Ok(contents) => {
            if contents.contains(needle) {
                println!(
                    "{} {} mentions {}",
                    "✔".bold().green(),
                    path.display(),
                    needle
                );
            } else {
                println!(
                    "{} {} does not mention {}",
                    "!".bold().yellow(),
                    path.display(),
                    needle
                );
            }
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("{} {} not found", "!".bold().yellow(), path.display());
            true
        }
        Err(e) => {
            println!(
                "{} could not read {}: {}",
                "✗".bold().red(),
                path.display(),
                e
            );
            false
        }
    }
}
