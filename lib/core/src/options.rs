/// Hard ceiling on the number of distinct variables: 2^16 = 65536 rows.
pub const MAX_VARIABLES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Add a column for every parenthesized group and atomic negation.
    pub include_subexpressions: bool,
    /// Reject formulas with more distinct variables than this.
    /// Values above [`MAX_VARIABLES`] are clamped.
    pub max_variables: usize,
}

pub const DEFAULT_OPTIONS: Options = Options {
    include_subexpressions: true,
    max_variables: MAX_VARIABLES,
};

impl Options {
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(MAX_VARIABLES)
    }
}

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}
