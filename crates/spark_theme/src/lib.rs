//! # Spark Theme
//!
//! Design tokens consumed by the Spark components. A [`Theme`] is a read-only
//! bundle of scales:
//!
//! - **Border**: radii and widths by size tier
//! - **Layout**: spacing by size tier
//! - **Colors**: base surface/outline tokens and feedback (success/error/alert)
//! - **Dims**: opacity levels
//! - **Typography**: font tokens with line heights
//!
//! Components hold a [`SharedTheme`] and treat replacing it as invalidating
//! everything derived from it.
//!
//! ```rust
//! use spark_theme::{ColorTokenExt, Theme};
//!
//! let theme = Theme::light();
//! let placeholder = theme.colors.base.on_surface.opacity(theme.dims.dim1);
//! assert_eq!(placeholder.color().a, theme.dims.dim1);
//! ```

pub mod config;
pub mod error;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use theme::{SharedTheme, Theme};
pub use tokens::*;
