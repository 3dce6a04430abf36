//! Farm and variety schemas

use serde::{Deserialize, Serialize};

/// A koi breed category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variety {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// A supplier farm. Varieties are shared between farms by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub variety_ids: Vec<i64>,

    #[serde(default)]
    pub media_url: Option<String>,
}

impl Farm {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Farm {
            id,
            name: name.into(),
            address: None,
            phone_number: None,
            variety_ids: Vec::new(),
            media_url: None,
        }
    }

    pub fn offers(&self, variety_id: i64) -> bool {
        self.variety_ids.contains(&variety_id)
    }
}
