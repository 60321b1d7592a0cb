use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_RECENT_COUNT: usize = 6;
pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const DEFAULT_POPULAR_TAG_LIMIT: usize = 10;
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Presentation knobs shared by the frontend and the CLI.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Articles per blog listing page.
    pub page_size: usize,
    /// Articles shown in the home page "recent" grid.
    pub recent_count: usize,
    /// Related articles shown under an article.
    pub related_limit: usize,
    pub popular_tag_limit: usize,
    pub avatar_base_url: String,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Inkscribe".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            recent_count: DEFAULT_RECENT_COUNT,
            related_limit: DEFAULT_RELATED_LIMIT,
            popular_tag_limit: DEFAULT_POPULAR_TAG_LIMIT,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            contact: ContactInfo::default(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@inkscribe.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Writer's Lane, Creative City, CC 12345".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let mut config: SiteConfig = serde_json::from_str(raw)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// `tel:` link for the configured phone number, digits and `+` only.
    pub fn phone_link(&self) -> String {
        let digits = self
            .contact
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "page_size": 4 }"#).expect("valid config");
        assert_eq!(config.page_size, 4);
        assert_eq!(config.recent_count, DEFAULT_RECENT_COUNT);
        assert_eq!(config.contact.email, "hello@inkscribe.com");
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let config = SiteConfig::from_json(r#"{ "page_size": 0 }"#).expect("valid config");
        assert_eq!(config.page_size, 1);
        assert_eq!(SiteConfig::default().with_page_size(0).page_size, 1);
    }

    #[test]
    fn phone_link_strips_formatting() {
        assert_eq!(SiteConfig::default().phone_link(), "tel:+15551234567");
    }
}
