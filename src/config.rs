//! Sanitize policies loaded from TOML files.
//!
//! ```toml
//! name = "custom"
//! tags = ["p", "strong"]
//! attributes = ["class"]
//! url_schemes = ["https"]
//! ```
//!
//! `url_schemes` is optional and defaults to
//! [`DEFAULT_URL_SCHEMES`](crate::sanitize::DEFAULT_URL_SCHEMES).

use crate::sanitize::DEFAULT_URL_SCHEMES;
use crate::{Result, SanitizePolicy};
use serde::Deserialize;
use std::path::Path;

/// On-disk form of a [`SanitizePolicy`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyFile {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub url_schemes: Option<Vec<String>>,
}

impl PolicyFile {
    /// Validates the file contents into a policy.
    pub fn into_policy(self) -> Result<SanitizePolicy> {
        match self.url_schemes {
            Some(schemes) => SanitizePolicy::new(self.name, self.tags, self.attributes, schemes),
            None => SanitizePolicy::new(self.name, self.tags, self.attributes, DEFAULT_URL_SCHEMES),
        }
    }
}

impl SanitizePolicy {
    /// Parses and validates a policy from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: PolicyFile = toml::from_str(source)?;
        file.into_policy()
    }
}

/// Reads a policy file from disk.
pub fn load_policy<P: AsRef<Path>>(path: P) -> Result<SanitizePolicy> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let policy = SanitizePolicy::from_toml_str(&source)?;
    tracing::debug!(path = %path.display(), policy = policy.name(), "loaded sanitize policy");
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_policy_from_toml() {
        let policy = SanitizePolicy::from_toml_str(
            r#"
name = "custom"
tags = ["P", "strong", "a"]
attributes = ["href"]
url_schemes = ["https"]
"#,
        )
        .expect("valid policy");

        assert_eq!(policy.name(), "custom");
        assert!(policy.allows_tag("p"));
        assert!(policy.allows_links());
        assert_eq!(policy.url_schemes().collect::<Vec<_>>(), vec!["https"]);
    }

    #[test]
    fn test_url_schemes_default() {
        let policy = SanitizePolicy::from_toml_str("name = \"plain\"\ntags = [\"p\"]\n")
            .expect("valid policy");
        assert_eq!(
            policy.url_schemes().collect::<Vec<_>>(),
            vec!["http", "https", "mailto"]
        );
        assert_eq!(policy.attributes().count(), 0);
    }

    #[test]
    fn test_forbidden_entries_rejected() {
        assert!(matches!(
            SanitizePolicy::from_toml_str("name = \"x\"\ntags = [\"script\"]\n"),
            Err(Error::ForbiddenTag(tag)) if tag == "script"
        ));
        assert!(matches!(
            SanitizePolicy::from_toml_str("name = \"x\"\nattributes = [\"onClick\"]\n"),
            Err(Error::ForbiddenAttribute(attr)) if attr == "onclick"
        ));
        assert!(matches!(
            SanitizePolicy::from_toml_str("name = \"x\"\nurl_schemes = [\"javascript\"]\n"),
            Err(Error::ForbiddenScheme(_))
        ));
    }

    #[test]
    fn test_page_altering_tags_rejected() {
        for tag in ["link", "meta", "base", "form", "frameset", "applet", "noscript", "template"] {
            let source = format!("name = \"x\"\ntags = [\"p\", \"{tag}\"]\n");
            assert!(
                matches!(
                    SanitizePolicy::from_toml_str(&source),
                    Err(Error::ForbiddenTag(ref rejected)) if rejected == tag
                ),
                "{tag} was accepted"
            );
        }
        assert!(matches!(
            SanitizePolicy::from_toml_str(
                "name = \"x\"\ntags = [\"button\"]\nattributes = [\"formaction\"]\n"
            ),
            Err(Error::ForbiddenAttribute(attr)) if attr == "formaction"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SanitizePolicy::from_toml_str("tags = "),
            Err(Error::PolicyParse(_))
        ));
        assert!(matches!(
            SanitizePolicy::from_toml_str("name = \"x\"\nelements = []\n"),
            Err(Error::PolicyParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_policy("/nonexistent/markgate-policy.toml"),
            Err(Error::Io(_))
        ));
    }
}
