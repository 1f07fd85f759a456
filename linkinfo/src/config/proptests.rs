//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn extension_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("\\.?[a-zA-Z0-9]{1,8}", 1..6)
}

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Human),
        Just(OutputFormat::Json),
        Just(OutputFormat::Yaml),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(extension_list_strategy()),
        prop::option::of(extension_list_strategy()),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(markdown, wiki_page, format)| Config {
            markdown_extensions: markdown,
            wiki_page_extensions: wiki_page,
            output_format: format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher source win, unset fields keep the lower value
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.markdown_extensions,
            high.markdown_extensions.or(low.markdown_extensions)
        );
        prop_assert_eq!(
            merged.wiki_page_extensions,
            high.wiki_page_extensions.or(low.wiki_page_extensions)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Every configured extension is recognized, regardless of case or dot
    #[test]
    fn configured_extensions_are_recognized(list in extension_list_strategy()) {
        let config = Config {
            markdown_extensions: Some(list.clone()),
            ..Default::default()
        };
        let extensions = config.extensions();
        for ext in &list {
            let bare = ext.strip_prefix('.').unwrap_or(ext);
            prop_assert!(extensions.markdown.contains(&bare.to_uppercase(), true));
            prop_assert!(extensions.wiki_page.contains(bare, true));
        }
    }

}
