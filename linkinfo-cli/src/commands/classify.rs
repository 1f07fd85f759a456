//! Command to check a link against a classification.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use linkinfo::{Classify, Extensions, LinkInfo, StandardLink, WikiLink};

/// Check whether a link has a classification.
///
/// With `--is`, exits with status 0 when the link has the classification
/// and 1 when it does not. Without it, prints every classification that
/// holds, one per line.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Link to classify
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Classification to check
    #[arg(long = "is", value_enum, value_name = "KIND")]
    pub kind: Option<LinkKind>,

    /// Invert the check (fail if the link has the classification)
    #[arg(long, requires = "kind")]
    pub not: bool,

    /// Classify as a wiki page link, which always resolves locally
    #[arg(long)]
    pub wiki: bool,
}

/// Classifications a link can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkKind {
    /// Needs resolving against a base path
    Relative,
    /// Needs no resolving
    Absolute,
    /// Resolves on the local system
    Local,
    /// Points outside the local system
    External,
    /// Carries a URI scheme
    Uri,
    /// Has an image extension
    Image,
    /// Has a markdown extension
    Markdown,
    /// Has a wiki page extension
    WikiPage,
}

impl LinkKind {
    /// Whether `link`, classified by `classify`, has this classification.
    pub fn holds(
        self,
        classify: &dyn Classify,
        link: &LinkInfo,
        extensions: &Extensions,
    ) -> bool {
        match self {
            Self::Relative => classify.is_relative(),
            Self::Absolute => classify.is_absolute(),
            Self::Local => classify.is_local(),
            Self::External => classify.is_external(),
            Self::Uri => classify.is_uri(),
            Self::Image => link.is_image_ext(),
            Self::Markdown => link.is_markdown_ext(extensions),
            Self::WikiPage => link.is_wiki_page_ext(extensions),
        }
    }

    /// The command-line name of this classification.
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let extensions = config.extensions();
        let link = LinkInfo::new(self.link.as_str());

        let classify: Box<dyn Classify> = if self.wiki {
            Box::new(WikiLink::from(link.clone()))
        } else {
            Box::new(StandardLink::from(link.clone()))
        };

        let Some(kind) = self.kind else {
            for kind in LinkKind::value_variants() {
                if kind.holds(classify.as_ref(), &link, &extensions) {
                    println!("{}", kind.name());
                }
            }
            return Ok(());
        };

        let holds = kind.holds(classify.as_ref(), &link, &extensions);
        if holds != self.not {
            return Ok(());
        }

        let msg = if self.not {
            format!("'{link}' is {}", kind.name())
        } else {
            format!("'{link}' is not {}", kind.name())
        };
        Err(CliError::SemanticFailure(msg))
    }
}
