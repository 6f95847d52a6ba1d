//! Rendering limits.
//!
//! Limits bound the size of every representation tree so that rendering
//! terminates on adversarial or very large grips. They can be loaded from
//! environment variables or constructed programmatically.

use std::env;

/// Limits applied while rendering a grip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepsConfig {
    /// Maximum nesting depth of child reps below the top-level grip.
    pub max_depth: usize,
    /// Maximum number of nodes in one representation tree.
    pub max_nodes: usize,
    /// Children shown by container reps in short and unset modes.
    pub short_items: usize,
    /// Children shown by container reps in long mode.
    pub long_items: usize,
    /// Length at which strings are cropped in tiny mode.
    pub string_crop_limit: usize,
}

impl RepsConfig {
    /// Construct a configuration with explicit limits.
    ///
    /// `max_nodes` is raised to at least 1 so the top-level rep always renders.
    #[inline]
    #[must_use]
    pub const fn new(
        max_depth: usize,
        max_nodes: usize,
        short_items: usize,
        long_items: usize,
        string_crop_limit: usize,
    ) -> Self {
        let max_nodes = if max_nodes < 1 { 1 } else { max_nodes };
        Self {
            max_depth,
            max_nodes,
            short_items,
            long_items,
            string_crop_limit,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables, falling back to
    /// [`RepsConfig::default`] for each one that is missing or unparsable:
    /// - `REPS_MAX_DEPTH`
    /// - `REPS_MAX_NODES`
    /// - `REPS_SHORT_ITEMS`
    /// - `REPS_LONG_ITEMS`
    /// - `REPS_STRING_CROP`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let read = |name: &str, fallback: usize| {
            env::var(name)
                .ok()
                .and_then(|val| val.parse::<usize>().ok())
                .unwrap_or(fallback)
        };
        Self::new(
            read("REPS_MAX_DEPTH", defaults.max_depth),
            read("REPS_MAX_NODES", defaults.max_nodes),
            read("REPS_SHORT_ITEMS", defaults.short_items),
            read("REPS_LONG_ITEMS", defaults.long_items),
            read("REPS_STRING_CROP", defaults.string_crop_limit),
        )
    }

    /// Number of children a container shows at `mode`.
    #[inline]
    pub const fn max_items(&self, mode: crate::Mode) -> usize {
        if mode.is_long() {
            self.long_items
        } else {
            self.short_items
        }
    }
}

impl Default for RepsConfig {
    #[inline]
    fn default() -> Self {
        Self::new(8, 2000, 3, 10, 50)
    }
}
