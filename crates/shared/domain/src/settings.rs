//! Site settings stored as JSON in the `settings` table.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOGO;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logo path or URL, used as the webhook avatar
    pub logo: String,
    /// Site title
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logo: DEFAULT_LOGO.to_string(),
            title: String::new(),
        }
    }
}

impl Settings {
    /// Logo as an absolute URL. Relative paths are resolved against
    /// `base_url`; without one they are returned unchanged.
    pub fn logo_url(&self, base_url: Option<&str>) -> String {
        if self.logo.starts_with("http://") || self.logo.starts_with("https://") {
            return self.logo.clone();
        }
        match base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                self.logo.trim_start_matches('/')
            ),
            None => self.logo.clone(),
        }
    }
}
