use crate::error::ConfigError;
use crate::evaluator::ListItemTags;
use serde::{Deserialize, Serialize};
use std::fs;

/// Presentation settings of the notifier. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub list_item_begin: String,
    pub list_item_end: String,
    /// Prefix of a person's profile link; the person id is appended.
    pub person_link_base: String,
    /// Phrases one of which closes a completed step.
    pub encouragements: Vec<String>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        let tags = ListItemTags::default();
        Self {
            list_item_begin: tags.begin,
            list_item_end: tags.end,
            person_link_base: "https://pyrus.com/t#pp".to_string(),
            encouragements: [
                "Отличная работа! 👍",
                "Так держать! 🙏",
                "Огонь 🔥",
                "Терпение и труд всё перетрут 💪",
                "Дай пять 🙏",
                "Супер",
                "Отпад 😎",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl NotifierConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn list_tags(&self) -> ListItemTags {
        ListItemTags {
            begin: self.list_item_begin.clone(),
            end: self.list_item_end.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.person_link_base.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "person_link_base must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
