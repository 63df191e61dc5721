//! Theme bundle

use std::sync::Arc;

use crate::tokens::{BorderTokens, ColorTokens, DimTokens, LayoutTokens, TypographyTokens};

/// Shared theme handle
///
/// Components compare themes by instance (`Arc::ptr_eq`): re-assigning the
/// same handle is a no-op, any other handle counts as a new theme.
pub type SharedTheme = Arc<Theme>;

/// A complete set of design tokens
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub border: BorderTokens,
    pub layout: LayoutTokens,
    pub colors: ColorTokens,
    pub dims: DimTokens,
    pub typography: TypographyTokens,
}

impl Theme {
    /// Wrap into a shared handle
    pub fn shared(self) -> SharedTheme {
        Arc::new(self)
    }

    /// Whether two handles refer to the same theme instance
    pub fn same_instance(a: &SharedTheme, b: &SharedTheme) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
