
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads, cleared by `clean_env`
const OVERRIDE_VARS: &[&str] = &[
    "GOOGLE_APPLICATION_CREDENTIALS",
    "RG_CREDENTIALS_PATH",
    "RG_API_BASE_URL",
    "RG_PROJECT_ID",
    "RG_TENANT_ID",
    "RG_DEFAULT_ROLE",
    "RG_CLAIM_NAME",
    "RG_CLAIM_MODE",
    "RG_LOG_LEVEL",
    "RG_LOG_COLORED",
    "RG_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear all override variables for the lifetime of the returned guards
pub(crate) fn clean_env() -> Vec<EnvGuard> {
    OVERRIDE_VARS.iter().copied().map(EnvGuard::remove).collect()
}

/// Create a temp config directory and set RG_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, Vec<EnvGuard>) {
    let cleared = clean_env();
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("RG_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard, cleared)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
