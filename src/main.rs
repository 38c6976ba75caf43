mod chat;
mod config;
mod constants;
mod models;
mod probes;
mod report;

use crate::config::verify_local_config;
use crate::probes::{chat_completions_url, models_url, run_chat_probe, run_models_probe};
use crate::report::{print_banner, print_failure_note, print_next_steps, print_summary};
use std::process;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    print_banner();

    let client = match reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            println!("failed to build HTTP client: {}", e);
            process::exit(1);
        }
    };

    // All three checks run regardless of earlier failures.
    let chat_ok = run_chat_probe(&client, &chat_completions_url()).await;
    let models_ok = run_models_probe(&client, &models_url()).await;
    let config_ok = verify_local_config();

    print_summary(chat_ok, models_ok, config_ok);

    let all_passed = chat_ok && models_ok && config_ok;
    if all_passed {
        print_next_steps();
    } else {
        print_failure_note();
    }

    process::exit(if all_passed { 0 } else { 1 });
}
