mod options;

pub use self::options::{InspectOptions, Style, Stylize, colored_stylize, plain_stylize};
use alloc::{format, string::{String, ToString}, vec::Vec};

/// A value which renders itself for human inspection within a recursion
/// depth budget.
///
/// `depth` is the remaining budget granted by the caller; a renderer asked
/// to render below the floor (`depth < 0`) produces a short collapsed form
/// without recursing into its contents.
pub trait Inspect {
    /// Renders the value given a remaining depth budget and rendering
    /// options.
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String {
        (**self).inspect(depth, options)
    }
}

macro_rules! impl_inspect_with_debug {
    ($($type:ty),* $(,)?) => {
        $(
            impl Inspect for $type {
                fn inspect(&self, _depth: i32, _options: &InspectOptions) -> String {
                    format!("{self:?}")
                }
            }
        )*
    };
}

impl_inspect_with_debug!(
    (),
    bool,
    char,
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String {
        match self {
            Some(value) if depth >= 0 => {
                let nested = options.descend();

                format!("Some({})", value.inspect(nested.budget(), &nested))
            }
            Some(_) => "Some(..)".to_string(),
            None => "None".to_string(),
        }
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String {
        if depth < 0 {
            return "[..]".to_string();
        }

        let nested = options.descend();

        format!(
            "[{}]",
            self.iter()
                .map(|value| value.inspect(nested.budget(), &nested))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String {
        self.as_slice().inspect(depth, options)
    }
}

impl<A: Inspect, B: Inspect> Inspect for (A, B) {
    fn inspect(&self, depth: i32, options: &InspectOptions) -> String {
        if depth < 0 {
            return "(..)".to_string();
        }

        let nested = options.descend();

        format!(
            "({}, {})",
            self.0.inspect(nested.budget(), &nested),
            self.1.inspect(nested.budget(), &nested)
        )
    }
}

/// A stock log sink forwarding rendered containers to the `log` facade at
/// debug level.
pub fn log_sink(message: &str) {
    log::debug!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(value: &impl Inspect) -> String {
        let options = InspectOptions::new();

        value.inspect(options.budget(), &options)
    }

    #[test]
    fn render_scalars() {
        assert_eq!(render(&42), "42");
        assert_eq!(render(&true), "true");
        assert_eq!(render(&'a'), "'a'");
        assert_eq!(render(&()), "()");
    }

    #[test]
    fn quote_strings() {
        assert_eq!(render(&"e"), "\"e\"");
        assert_eq!(render(&"e".to_string()), "\"e\"");
    }

    #[test]
    fn render_containers() {
        assert_eq!(render(&vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(render(&Vec::<i32>::new()), "[]");
        assert_eq!(render(&Some(1)), "Some(1)");
        assert_eq!(render(&None::<i32>), "None");
        assert_eq!(render(&(1, "e")), "(1, \"e\")");
    }

    #[test]
    fn collapse_containers_below_depth_floor() {
        let options = InspectOptions::new().set_depth(Some(0));
        let nested = vec![vec![1], vec![2]];

        assert_eq!(nested.inspect(options.budget(), &options), "[[..], [..]]");
    }

    #[test]
    fn forward_to_log_facade() {
        let _ = env_logger::builder().is_test(true).try_init();

        log_sink("Success( 3 )");
    }
}
