//! # Spark Text Input
//!
//! The style engine behind Spark's text field and text editor. It maps a
//! theme and the interactive state of an input (intent, focus, enablement,
//! read-only, clear mode, border style) to the concrete values a view renders:
//! colors, border layout, spacing, dim, font, clear-button visibility and
//! paddings.
//!
//! ## Layers
//!
//! - [`use_cases`]: one pure derivation per style dimension, behind the
//!   [`StyleUseCases`] seam
//! - [`StyleEngine`]: inputs shared by every text input, recomputing only the
//!   outputs that depend on a changed input
//! - [`TextFieldViewModel`], [`TextEditorViewModel`], [`TextFieldAddonsViewModel`]:
//!   the engine composed with per-control state
//!
//! Every output is a [`Published`](spark_core::Published) cell; views
//! subscribe to the ones they render.
//!
//! ## Example
//!
//! ```rust
//! use spark_textinput::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let theme = Theme::light().shared();
//! let mut field = TextFieldViewModel::new(TextFieldInputs::new(theme.clone()));
//!
//! let width = Rc::new(Cell::new(0.0));
//! let width_clone = width.clone();
//! let _subscription = field
//!     .border_layout()
//!     .subscribe(move |layout| width_clone.set(layout.width));
//!
//! field.set_is_focused(true);
//! assert_eq!(width.get(), theme.border.width.medium);
//! ```

pub mod accessibility;
pub mod addons;
pub mod config;
pub mod editor;
pub mod engine;
pub mod field;
pub mod types;
pub mod use_cases;

#[cfg(test)]
mod tests;

pub use addons::TextFieldAddonsViewModel;
pub use config::TextInputConfig;
pub use editor::TextEditorViewModel;
pub use engine::{
    ContainerSurface, FieldSurface, Outputs, StyleEngine, StyleInput, StyleInputs, SurfaceSink,
};
pub use field::{TextFieldInputs, TextFieldViewModel};
pub use types::{
    AddonConfiguration, AddonSide, BorderLayout, BorderStyle, ClearMode, ColorSet, ContentPadding,
    EdgeSpacings, Intent, Spacings,
};
pub use use_cases::{DefaultStyleUseCases, StyleUseCases};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AddonConfiguration, AddonSide, BorderStyle, ClearMode, Intent, StyleInputs,
        TextEditorViewModel, TextFieldAddonsViewModel, TextFieldInputs, TextFieldViewModel,
        TextInputConfig,
    };
    pub use spark_core::{EdgeInsets, Published, Subscription};
    pub use spark_theme::{ColorToken, ColorTokenExt, SharedTheme, Theme};
}
