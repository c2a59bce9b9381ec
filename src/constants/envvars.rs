pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const COMPILER: &str = "YD_COMPILER";
pub const PLUGIN_DIR: &str = "YD_PLUGIN_DIR";
pub const DATA_DIR: &str = "YD_DATA_DIR";
pub const ARTIFACT_PATH: &str = "YD_ARTIFACT_PATH";
pub const NAME_SOURCE: &str = "YD_NAME_SOURCE";
pub const RETRY_ATTEMPTS: &str = "YD_RETRY_ATTEMPTS";
pub const RETRY_INTERVAL_MS: &str = "YD_RETRY_INTERVAL_MS";
