//! Output filename prediction.
//!
//! Reproduces how the host names a video render from the user's output
//! template: which placeholder run (if any) becomes the frame token, what text
//! stays literal, and which extension ends the name.

mod extension;
mod frames;
mod placeholder;
mod rule;

pub use extension::split_extension;
pub use frames::{FrameRange, FrameRangeError, DEFAULT_FRAME_WIDTH};
pub use placeholder::{scan, PlaceholderRun, PLACEHOLDER};
pub use rule::NamingRule;

use serde::Serialize;

use crate::container::ContainerConfig;

/// How to assemble the predicted filename: `base`, frame token, `middle`,
/// `extension`, in that order.
///
/// `placeholder_width == 0` means no frame token is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingPlan {
    pub base: String,
    pub placeholder_width: usize,
    pub middle: String,
    pub extension: String,
}

impl NamingPlan {
    pub fn new(base: &str, placeholder_width: usize, middle: &str, extension: &str) -> Self {
        Self {
            base: base.to_string(),
            placeholder_width,
            middle: middle.to_string(),
            extension: extension.to_string(),
        }
    }

    /// Renders the filename for `frames`.
    pub fn render(&self, frames: &FrameRange) -> String {
        let mut name = self.base.clone();
        if self.placeholder_width > 0 {
            name.push_str(&frames.token(self.placeholder_width));
        }
        name.push_str(&self.middle);
        name.push_str(&self.extension);
        name
    }
}

/// Builds the naming plan for a template basename.
///
/// When the output setting points at a directory the basename is ignored and
/// the host names the file from the frame token alone.
pub fn plan<'a>(
    basename: &'a str,
    container: &ContainerConfig,
    target_is_dir: bool,
) -> (NamingRule<'a>, NamingPlan) {
    let basename = if target_is_dir { "" } else { basename };
    let rule = NamingRule::select(basename, container);
    let plan = rule.into_plan(container);
    tracing::debug!(
        rule = rule.name(),
        basename,
        base = %plan.base,
        width = plan.placeholder_width,
        middle = %plan.middle,
        extension = %plan.extension,
        "naming plan"
    );
    (rule, plan)
}
