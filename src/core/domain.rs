use serde::{Deserialize, Serialize};

pub const DEFAULT_NO_CATEGORY_LABEL: &str = "Belum ada";

// Configuration abstracts config options for the library dashboard
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // start with the illustrative sample collection instead of an empty one
    pub seed_sample_books: bool,
    // shown as most popular category while the collection is empty
    pub no_category_label: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            seed_sample_books: true,
            no_category_label: DEFAULT_NO_CATEGORY_LABEL.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let branch = std::env::var("SIPUDES_BRANCH").unwrap_or_else(|_| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Ok(seed) = std::env::var("SIPUDES_SEED") {
            config.seed_sample_books = parse_flag(seed.as_str());
        }
        if let Ok(label) = std::env::var("SIPUDES_NO_CATEGORY_LABEL") {
            config.no_category_label = label;
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{parse_flag, Configuration, DEFAULT_NO_CATEGORY_LABEL};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert!(config.seed_sample_books);
        assert_eq!(DEFAULT_NO_CATEGORY_LABEL, config.no_category_label.as_str());
    }

    #[tokio::test]
    async fn test_should_parse_seed_flag() {
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" 0 "));
        assert!(!parse_flag("OFF"));
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
    }
}
