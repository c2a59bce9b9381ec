use std::{env, path::PathBuf};

use crate::constants::{defaults, envvars};

pub fn data_dir() -> PathBuf {
    if let Ok(data_dir) = env::var(envvars::DATA_DIR) {
        return data_dir.into();
    }
    PathBuf::from(defaults::DATA_DIR)
}

pub fn default_artifact_path() -> PathBuf {
    data_dir().join(defaults::ARTIFACT_FILE)
}
