//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use linkinfo::config::{Config, ConfigMerger};
///
/// let low = Config { markdown_extensions: Some(vec!["md".into()]), ..Default::default() };
/// let high = Config { markdown_extensions: Some(vec!["mkd".into()]), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.markdown_extensions, Some(vec!["mkd".to_string()]));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Extension lists are replaced as a whole rather than accumulated, so
    /// a higher-precedence source can narrow the recognized set.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.markdown_extensions.is_some() {
            target.markdown_extensions.clone_from(&source.markdown_extensions);
        }

        if source.wiki_page_extensions.is_some() {
            target
                .wiki_page_extensions
                .clone_from(&source.wiki_page_extensions);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
