use anyhow::{Context, Result};
use bbh_parser::tag::SimpleTag;
use bbh_parser::Parser;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, trace};

/// Extra tag wrapping its content in an html element.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct TagConfig {
    /// Tag name used in bbcode, letters only.
    pub(crate) name: String,

    /// Html element name the tag renders into.
    ///
    /// `sup` turns `[name]x[/name]` into `<sup>x</sup>`.
    pub(crate) html: String,
}

/// Render configuration.
///
/// ```toml
/// emphasis = true
/// disabled = ["img"]
///
/// [[tag]]
/// name = "sup"
/// html = "sup"
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Render `[b]` and `[i]` as `<strong>` and `<em>`.
    #[serde(default)]
    pub(crate) emphasis: bool,

    /// Names of tags to remove, they render as plain text.
    #[serde(default)]
    pub(crate) disabled: Vec<String>,

    /// Extra simple tags.
    ///
    /// Registered after `disabled` applied, so a disabled built-in name can
    /// be taken by an extra tag.
    #[serde(default, rename = "tag")]
    pub(crate) tags: Vec<TagConfig>,
}

impl Config {
    /// Load config from toml file at `path`.
    pub(crate) async fn load(path: &str) -> Result<Self> {
        let data = fs::read_to_string(path)
            .await
            .with_context(|| format!("when reading config file {path}"))?;
        let config: Config = toml::from_str(data.as_str()).context("invalid config")?;
        trace!("{config:#?}");
        Ok(config)
    }

    /// Build a parser with default tags changed as configured.
    ///
    /// # Errors
    ///
    /// When any extra tag has an invalid name.
    pub(crate) fn build_parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser.use_emphasis_tags(self.emphasis);

        let registry = parser.registry_mut();
        for name in self.disabled.iter() {
            if registry.remove(name).is_none() {
                debug!("disabled tag {name:?} is not registered");
            }
        }
        for tag in self.tags.iter() {
            registry
                .register(tag.name.as_str(), SimpleTag::new(tag.html.as_str()))
                .with_context(|| format!("when registering tag {:?}", tag.name))?;
        }

        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            emphasis = true
            disabled = ["img"]

            [[tag]]
            name = "sup"
            html = "sup"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                emphasis: true,
                disabled: vec!["img".to_owned()],
                tags: vec![TagConfig {
                    name: "sup".to_owned(),
                    html: "sup".to_owned(),
                }],
            }
        );
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_parser() {
        let config = Config {
            emphasis: true,
            disabled: vec!["IMG".to_owned(), "not-registered".to_owned()],
            tags: vec![TagConfig {
                name: "sup".to_owned(),
                html: "sup".to_owned(),
            }],
        };
        let parser = config.build_parser().unwrap();
        assert_eq!(
            parser.transform("[b]x[/b][sup]2[/sup][img]y[/img]"),
            "<p><strong>x</strong><sup>2</sup>[img]y[/img]</p>"
        );
    }

    #[test]
    fn test_build_parser_invalid_tag_name() {
        let config = Config {
            tags: vec![TagConfig {
                name: "h1".to_owned(),
                html: "h1".to_owned(),
            }],
            ..Config::default()
        };
        assert!(config.build_parser().is_err());
    }
}
