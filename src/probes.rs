use crate::chat::{ChatApiResponse, ChatMessage, ChatRequestBody};
use crate::constants::{
    API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, MAX_COMPLETION_TOKENS, MODEL_PREVIEW_LIMIT,
    PROBE_MODEL, PROBE_PROMPT,
};
use crate::models::{ModelInfo, ModelsApiResponse};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use std::{env, error::Error};

pub fn api_base_url() -> String {
    env::var(BASE_URL_VAR)
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn chat_completions_url() -> String {
    format!("{}/chat/completions", api_base_url())
}

pub fn models_url() -> String {
    format!("{}/models", api_base_url())
}

pub fn build_headers() -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", env::var(API_KEY_VAR)?))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn build_chat_request() -> ChatRequestBody {
    ChatRequestBody {
        model: PROBE_MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: PROBE_PROMPT.to_string(),
        }],
        stream: false,
        max_tokens: MAX_COMPLETION_TOKENS,
    }
}

/// First N model identifiers plus the count of omitted ones.
pub fn model_preview(models: &[ModelInfo]) -> (&[ModelInfo], usize) {
    let shown = models.len().min(MODEL_PREVIEW_LIMIT);
    (&models[..shown], models.len() - shown)
}

/// Chat-completion probe boundary. Every error ends up printed here, never
/// propagated, so the remaining checks always run.
pub async fn run_chat_probe(client: &Client, api_url: &str) -> bool {
    println!(
        "{} chat completion via {}...",
        "»".bold().cyan(),
        PROBE_MODEL
    );
    match chat_probe(client, api_url).await {
        Ok(()) => true,
        Err(e) => {
            println!("{} chat completion failed: {}", "✗".bold().red(), e);
            false
        }
    }
}

async fn chat_probe(client: &Client, api_url: &str) -> Result<(), Box<dyn Error>> {
    let headers = build_headers()?;
    let request_body = build_chat_request();

    debug!("POST {}", api_url);
    let spinner = create_spinner("green", "Waiting for completion...".to_string());
    let response = client
        .post(api_url)
        .headers(headers)
        .json(&request_body)
        .send()
        .await;
    spinner.finish_and_clear();

    let response = response?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("status {}: {}", status, body.trim()).into());
    }

    let api_response = response.json::<ChatApiResponse>().await?;
    println!(
        "{} chat completion succeeded ({})",
        "✔".bold().green(),
        api_response.model
    );
    let reply = api_response
        .choices
        .get(0)
        .map_or("(no content in response)", |c| c.message.content.as_str());
    println!("  reply: {}", reply);
    if let Some(usage) = &api_response.usage {
        println!(
            "  usage: {} prompt + {} completion = {} total tokens",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }
    Ok(())
}

/// Model-listing probe boundary, independent of the chat probe's outcome.
pub async fn run_models_probe(client: &Client, api_url: &str) -> bool {
    println!("{} model listing...", "»".bold().cyan());
    match models_probe(client, api_url).await {
        Ok(()) => true,
        Err(e) => {
            println!("{} model listing failed: {}", "✗".bold().red(), e);
            false
        }
    }
}

async fn models_probe(client: &Client, api_url: &str) -> Result<(), Box<dyn Error>> {
    let headers = build_headers()?;

    debug!("GET {}", api_url);
    let spinner = create_spinner("cyan", "Fetching model list...".to_string());
    let response = client.get(api_url).headers(headers).send().await;
    spinner.finish_and_clear();

    let response = response?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("status {}: {}", status, body.trim()).into());
    }

    let response_body = response.text().await?;
    let api_response: ModelsApiResponse = serde_json::from_str(&response_body)?;
    println!(
        "{} {} models available",
        "✔".bold().green(),
        api_response.data.len()
    );
    let (shown, omitted) = model_preview(&api_response.data);
    for model in shown {
        println!("   - {}", model.id);
    }
    if omitted > 0 {
        println!("   ... and {} more", omitted);
    }
    Ok(())
}
