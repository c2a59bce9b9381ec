use std::time::Duration;

pub const LOG_LEVEL: &str = "info";
pub const COMPILER: &str = "pyang";
pub const DATA_DIR: &str = ".";
pub const ARTIFACT_FILE: &str = "binding.json";
pub const NAME_SOURCE: &str = "name";

pub const RETRY_ATTEMPTS: u32 = 10;
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);
