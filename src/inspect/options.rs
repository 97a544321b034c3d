use alloc::{borrow::ToOwned, string::String};
use colored::Colorize;

/// A semantic class a stylize callback may use to colour a rendered
/// fragment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// A variant tag such as `Success` or `[Failure]`.
    Tag,
    /// Any other fragment.
    Plain,
}

/// A callback mapping a fragment and its semantic class to a styled string.
pub type Stylize = fn(&str, Style) -> String;

/// Rendering options for the [`Inspect`](crate::Inspect) protocol.
#[derive(Clone, Copy, Debug)]
pub struct InspectOptions {
    depth: Option<i32>,
    stylize: Stylize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectOptions {
    /// A default depth budget for nested payloads.
    pub const DEFAULT_DEPTH: i32 = 2;

    /// Creates options with the default depth budget and no styling.
    pub const fn new() -> Self {
        Self {
            depth: Some(Self::DEFAULT_DEPTH),
            stylize: plain_stylize,
        }
    }

    /// Returns the configured depth budget, or `None` when unlimited.
    pub const fn depth(&self) -> Option<i32> {
        self.depth
    }

    /// Sets a depth budget; `None` renders nested structures without limit.
    pub const fn set_depth(mut self, depth: Option<i32>) -> Self {
        self.depth = depth;
        self
    }

    /// Sets a stylize callback.
    pub const fn set_stylize(mut self, stylize: Stylize) -> Self {
        self.stylize = stylize;
        self
    }

    /// Applies the stylize callback to a fragment.
    pub fn stylize(&self, fragment: &str, style: Style) -> String {
        (self.stylize)(fragment, style)
    }

    /// Returns the remaining recursion budget the configured depth grants.
    pub const fn budget(&self) -> i32 {
        match self.depth {
            Some(depth) => depth,
            None => i32::MAX,
        }
    }

    /// Returns options for rendering one level deeper.
    pub const fn descend(&self) -> Self {
        Self {
            depth: match self.depth {
                Some(depth) => Some(depth - 1),
                None => None,
            },
            stylize: self.stylize,
        }
    }
}

/// A stylize callback which applies no styling.
pub fn plain_stylize(fragment: &str, _style: Style) -> String {
    fragment.to_owned()
}

/// A stylize callback which colours fragments for terminal output.
pub fn colored_stylize(fragment: &str, style: Style) -> String {
    match style {
        Style::Tag => fragment.yellow().to_string(),
        Style::Plain => fragment.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descend_decrements_depth() {
        let options = InspectOptions::new().set_depth(Some(1));

        assert_eq!(options.descend().depth(), Some(0));
        assert_eq!(options.descend().descend().depth(), Some(-1));
    }

    #[test]
    fn descend_keeps_unlimited_depth() {
        let options = InspectOptions::new().set_depth(None);

        assert_eq!(options.descend().depth(), None);
        assert_eq!(options.budget(), i32::MAX);
    }

    #[test]
    fn stylize_plainly_by_default() {
        assert_eq!(InspectOptions::new().stylize("Success", Style::Tag), "Success");
    }

    #[test]
    fn colour_tags_only() {
        colored::control::set_override(true);

        assert_eq!(colored_stylize("[Success]", Style::Tag), "\u{1b}[33m[Success]\u{1b}[0m");
        assert_eq!(colored_stylize("3", Style::Plain), "3");

        colored::control::unset_override();
    }
}
