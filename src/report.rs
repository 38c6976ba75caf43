use crate::constants::{ENDPOINT_NAME, PROBE_MODEL};
use colored::{ColoredString, Colorize};

pub fn print_banner() {
    println!("{:━^60}", " LibreChat endpoint diagnostics ".yellow());
}

fn status_mark(ok: bool) -> ColoredString {
    if ok {
        "pass".bold().green()
    } else {
        "fail".bold().red()
    }
}

pub fn print_summary(chat_ok: bool, models_ok: bool, config_ok: bool) {
    println!("{:━^60}", " results ".yellow());
    println!("  {:<18} {}", "chat completion", status_mark(chat_ok));
    println!("  {:<18} {}", "model listing", status_mark(models_ok));
    println!("  {:<18} {}", "configuration", status_mark(config_ok));
}

pub fn print_next_steps() {
    println!(
        "\n{} all checks passed, LibreChat is ready to use {}.",
        "✔".bold().green(),
        ENDPOINT_NAME
    );
    println!("\nNext steps:");
    println!(
        "  1. Start LibreChat: {} and {}",
        "npm run backend:dev".bold().cyan(),
        "npm run frontend:dev".bold().cyan()
    );
    println!(
        "  2. Select the {} endpoint in the UI",
        ENDPOINT_NAME.bold().green()
    );
    println!("  3. Pick the {} model", PROBE_MODEL.bold().green());
    println!("  4. Start chatting");
    println!("{:━^60}", "".yellow());
}

pub fn print_failure_note() {
    println!(
        "\n{} some checks failed, review the diagnostics above.",
        "!".bold().yellow()
    );
}
