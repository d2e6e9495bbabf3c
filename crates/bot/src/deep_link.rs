//! Links that open the club web app from a chat.

use reqwest::Url;

use crate::error::{BotError, Result};

/// Query parameter the web app reads on start-up
pub const START_PARAM: &str = "startapp";

/// Base URL of the web app, validated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    base: Url,
}

impl DeepLink {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base.trim())
            .map_err(|e| BotError::InvalidUrl(format!("{}: {}", base, e)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(BotError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                base
            )));
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// The web app URL with an optional start parameter appended.
    ///
    /// Existing query pairs on the base are preserved; an empty parameter
    /// is treated as absent.
    pub fn build(&self, start_param: Option<&str>) -> String {
        let mut url = self.base.clone();

        if let Some(param) = start_param.map(str::trim).filter(|p| !p.is_empty()) {
            url.query_pairs_mut().append_pair(START_PARAM, param);
        }

        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_without_start_param() {
        let link = DeepLink::new("https://dojo.example.com/app").unwrap();
        assert_eq!(link.build(None), "https://dojo.example.com/app");
        assert_eq!(link.build(Some("  ")), "https://dojo.example.com/app");
    }

    #[test]
    fn test_start_param_is_appended_and_encoded() {
        let link = DeepLink::new("https://dojo.example.com/app?lang=en").unwrap();
        assert_eq!(
            link.build(Some("42")),
            "https://dojo.example.com/app?lang=en&startapp=42"
        );
        assert_eq!(
            link.build(Some("a b&c")),
            "https://dojo.example.com/app?lang=en&startapp=a+b%26c"
        );
    }

    #[test]
    fn test_rejects_invalid_bases() {
        assert!(matches!(
            DeepLink::new("not a url"),
            Err(BotError::InvalidUrl(_))
        ));
        assert!(matches!(
            DeepLink::new("ftp://dojo.example.com"),
            Err(BotError::InvalidUrl(_))
        ));
    }
}
