//! Config schema - Configuration for the koi workflow tools

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the booking REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the media upload service
    #[serde(default = "default_media_base_url")]
    pub media_base_url: String,

    /// Directory holding the entity snapshot files, relative to the root
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Rows per page for listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_media_base_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_page_size() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            media_base_url: default_media_base_url(),
            data_dir: default_data_dir(),
            page_size: default_page_size(),
        }
    }
}
