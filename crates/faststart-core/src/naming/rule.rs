//! Naming rules, in the priority order the host applies them.

use super::extension::split_extension;
use super::frames::DEFAULT_FRAME_WIDTH;
use super::placeholder::{scan, PlaceholderRun};
use super::NamingPlan;
use crate::container::ContainerConfig;

/// The single rule that decides how a template becomes a filename.
///
/// The first four variants apply when the host enforces the container
/// extension; the last two when the user's extension is kept literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingRule<'a> {
    /// Correct extension typed by the user and a placeholder run in the name.
    /// The run is kept as literal text.
    ExactExtensionLiteral { name_part: &'a str },
    /// Correct extension typed by the user, no placeholders in the name.
    ExactExtension { name_part: &'a str },
    /// Wrong or missing extension; the rightmost run anywhere in the basename
    /// becomes the frame token.
    RightmostPlaceholder(PlaceholderRun<'a>),
    /// Wrong or missing extension and no placeholders: the host numbers the
    /// file anyway with the default width.
    DefaultFrames { basename: &'a str },
    /// Extension not enforced, placeholder run in the stem.
    LiteralPlaceholder {
        run: PlaceholderRun<'a>,
        extension: &'a str,
    },
    /// Extension not enforced, no placeholders: the name is used as typed.
    Verbatim { stem: &'a str, extension: &'a str },
}

impl<'a> NamingRule<'a> {
    /// Selects the first matching rule for `basename`.
    pub fn select(basename: &'a str, container: &ContainerConfig) -> Self {
        if container.enforce_extension() {
            let (name_part, user_ext) = split_extension(basename);
            if container.is_correct_extension(user_ext) {
                if scan(name_part).is_some() {
                    NamingRule::ExactExtensionLiteral { name_part }
                } else {
                    NamingRule::ExactExtension { name_part }
                }
            } else if let Some(run) = scan(basename) {
                NamingRule::RightmostPlaceholder(run)
            } else {
                NamingRule::DefaultFrames { basename }
            }
        } else {
            let (stem, extension) = split_extension(basename);
            match scan(stem) {
                Some(run) => NamingRule::LiteralPlaceholder { run, extension },
                None => NamingRule::Verbatim { stem, extension },
            }
        }
    }

    /// Short stable name, used in logs and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            NamingRule::ExactExtensionLiteral { .. } => "exact-extension-literal",
            NamingRule::ExactExtension { .. } => "exact-extension",
            NamingRule::RightmostPlaceholder(_) => "rightmost-placeholder",
            NamingRule::DefaultFrames { .. } => "default-frames",
            NamingRule::LiteralPlaceholder { .. } => "literal-placeholder",
            NamingRule::Verbatim { .. } => "verbatim",
        }
    }

    pub fn into_plan(self, container: &ContainerConfig) -> NamingPlan {
        let forced = container.correct_extension();
        match self {
            NamingRule::ExactExtensionLiteral { name_part }
            | NamingRule::ExactExtension { name_part } => {
                NamingPlan::new(name_part, 0, "", forced)
            }
            NamingRule::RightmostPlaceholder(run) => {
                NamingPlan::new(run.prefix, run.run_length, run.remainder, forced)
            }
            NamingRule::DefaultFrames { basename } => {
                NamingPlan::new(basename, DEFAULT_FRAME_WIDTH, "", forced)
            }
            NamingRule::LiteralPlaceholder { run, extension } => {
                NamingPlan::new(run.prefix, run.run_length, run.remainder, extension)
            }
            NamingRule::Verbatim { stem, extension } => NamingPlan::new(stem, 0, "", extension),
        }
    }
}
