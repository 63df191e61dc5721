//! Accessibility identifiers
//!
//! Stable identifiers the view layer assigns to the rendered controls, used
//! by UI tests to locate them.

pub const TEXT_FIELD: &str = "spark-text-field";
pub const TEXT_FIELD_CLEAR_BUTTON: &str = "spark-text-field-clear-button";
pub const TEXT_FIELD_ADDONS: &str = "spark-text-field-addons";
pub const TEXT_FIELD_LEFT_ADDON: &str = "spark-text-field-left-addon";
pub const TEXT_FIELD_RIGHT_ADDON: &str = "spark-text-field-right-addon";
pub const TEXT_EDITOR: &str = "spark-text-editor";
