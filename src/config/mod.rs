//! Configuration module

mod loader;

pub use loader::{
    apply_env_overrides, load_config, ENV_API_BASE_URL, ENV_DATA_DIR, ENV_MEDIA_BASE_URL,
    ENV_PAGE_SIZE,
};
