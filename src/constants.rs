// Deployment-specific values live here so pointing the doctor at another
// provider only touches this file.
pub const DEFAULT_BASE_URL: &str = "https://cc.zhihuiapi.top/v1";
pub const BASE_URL_VAR: &str = "ZHIHUI_BASE_URL";
pub const API_KEY_VAR: &str = "ZHIHUI_API_KEY";
pub const ENDPOINT_NAME: &str = "Zhihui API";

pub const PROBE_MODEL: &str = "claude-sonnet-4-20250514";
pub const PROBE_PROMPT: &str = "Hello! Please reply with a short greeting.";
pub const MAX_COMPLETION_TOKENS: u32 = 100;
pub const MODEL_PREVIEW_LIMIT: usize = 5;

pub const LIBRECHAT_CONFIG_FILE: &str = "librechat.yaml";
pub const LIBRECHAT_CONFIG_NEEDLE: &str = "cc.zhihuiapi.top";
pub const ENV_FILE: &str = ".env";
pub const ENV_NEEDLE: &str = "ZHIHUI_API_KEY=";
