//! Default input configuration
//!
//! Defaults are explicit values handed to the input builders rather than
//! process-wide state. A config can be deserialized, e.g. from a `[text_input]`
//! table of an application's TOML file:
//!
//! ```toml
//! intent = "neutral"
//! border_style = "rounded_rect"
//! clear_mode = "while_editing"
//! ```

use serde::Deserialize;

use crate::types::{BorderStyle, ClearMode, Intent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextInputConfig {
    pub intent: Intent,
    pub border_style: BorderStyle,
    pub clear_mode: ClearMode,
}
