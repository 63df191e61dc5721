//! Text field view-model
//!
//! Adds to the [`StyleEngine`] what a single-line field needs: the clear
//! button policy, content padding, and the paddings of its left and right
//! addons.
//!
//! ```rust
//! use spark_textinput::prelude::*;
//!
//! let theme = Theme::light().shared();
//! let mut field = TextFieldViewModel::new(
//!     TextFieldInputs::new(theme).clear_mode(ClearMode::WhileEditing),
//! );
//! assert!(!*field.is_clear_button().get());
//!
//! field.set_is_focused(true);
//! assert!(*field.is_clear_button().get());
//! assert_eq!(field.content_padding().get().input_trailing, 0.0);
//! ```

use spark_core::{EdgeInsets, Published};
use spark_theme::{FontToken, SharedTheme};

use crate::config::TextInputConfig;
use crate::engine::{FieldSurface, Outputs, StyleEngine, StyleInputs, SurfaceSink};
use crate::types::{
    AddonConfiguration, AddonSide, BorderLayout, BorderStyle, ClearMode, ColorSet, ContentPadding,
    Intent, Spacings,
};
use crate::use_cases::{DefaultStyleUseCases, StyleUseCases};

/// Complete input set of a text field
#[derive(Clone, Debug)]
pub struct TextFieldInputs {
    pub style: StyleInputs,
    pub clear_mode: ClearMode,
    pub left_addon: AddonConfiguration,
    pub right_addon: AddonConfiguration,
}

impl TextFieldInputs {
    pub fn new(theme: SharedTheme) -> Self {
        Self {
            style: StyleInputs::new(theme),
            clear_mode: ClearMode::default(),
            left_addon: AddonConfiguration::default(),
            right_addon: AddonConfiguration::default(),
        }
    }

    pub fn from_config(theme: SharedTheme, config: &TextInputConfig) -> Self {
        Self {
            style: StyleInputs::from_config(theme, config),
            clear_mode: config.clear_mode,
            left_addon: AddonConfiguration::default(),
            right_addon: AddonConfiguration::default(),
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.style = self.style.intent(intent);
        self
    }

    pub fn border_style(mut self, border_style: BorderStyle) -> Self {
        self.style = self.style.border_style(border_style);
        self
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.style = self.style.focused(is_focused);
        self
    }

    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.style = self.style.enabled(is_enabled);
        self
    }

    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.style = self.style.read_only(is_read_only);
        self
    }

    pub fn clear_mode(mut self, clear_mode: ClearMode) -> Self {
        self.clear_mode = clear_mode;
        self
    }

    pub fn left_addon(mut self, configuration: AddonConfiguration) -> Self {
        self.left_addon = configuration;
        self
    }

    pub fn right_addon(mut self, configuration: AddonConfiguration) -> Self {
        self.right_addon = configuration;
        self
    }
}

/// Style state of a single-line text field
pub struct TextFieldViewModel<U = DefaultStyleUseCases, S = FieldSurface> {
    engine: StyleEngine<U, S>,
    clear_mode: ClearMode,
    left_addon: AddonConfiguration,
    right_addon: AddonConfiguration,
    is_clear_button: Published<bool>,
    content_padding: Published<ContentPadding>,
    sub_content_spacing: Published<f32>,
    left_addon_padding: Published<EdgeInsets>,
    right_addon_padding: Published<EdgeInsets>,
}

impl TextFieldViewModel {
    pub fn new(inputs: TextFieldInputs) -> Self {
        Self::with_parts(inputs, DefaultStyleUseCases, FieldSurface)
    }
}

impl<U: StyleUseCases> TextFieldViewModel<U> {
    pub fn with_use_cases(inputs: TextFieldInputs, use_cases: U) -> Self {
        Self::with_parts(inputs, use_cases, FieldSurface)
    }
}

impl<U: StyleUseCases, S: SurfaceSink> TextFieldViewModel<U, S> {
    /// Build the view-model and compute every output once
    pub fn with_parts(inputs: TextFieldInputs, use_cases: U, surface: S) -> Self {
        let TextFieldInputs {
            style,
            clear_mode,
            left_addon,
            right_addon,
        } = inputs;

        let mut view_model = Self {
            engine: StyleEngine::with_parts(style, use_cases, surface),
            clear_mode,
            left_addon,
            right_addon,
            is_clear_button: Published::new(false),
            content_padding: Published::new(ContentPadding::default()),
            sub_content_spacing: Published::new(0.0),
            left_addon_padding: Published::new(EdgeInsets::ZERO),
            right_addon_padding: Published::new(EdgeInsets::ZERO),
        };
        view_model.recompute_field();
        view_model
    }

    /// Replace every input and recompute every output
    pub fn update_all(&mut self, inputs: TextFieldInputs) {
        let TextFieldInputs {
            style,
            clear_mode,
            left_addon,
            right_addon,
        } = inputs;

        self.engine.update_all(style);
        self.clear_mode = clear_mode;
        self.left_addon = left_addon;
        self.right_addon = right_addon;
        self.recompute_field();
    }

    pub fn set_theme(&mut self, theme: SharedTheme) {
        let outputs = self.engine.set_theme(theme);
        self.engine_did_update(outputs);
    }

    pub fn set_intent(&mut self, intent: Intent) {
        let outputs = self.engine.set_intent(intent);
        self.engine_did_update(outputs);
    }

    pub fn set_border_style(&mut self, border_style: BorderStyle) {
        let outputs = self.engine.set_border_style(border_style);
        self.engine_did_update(outputs);
    }

    pub fn set_is_focused(&mut self, is_focused: bool) {
        let outputs = self.engine.set_is_focused(is_focused);
        if !outputs.is_empty() {
            self.update_clear_button();
        }
        self.engine_did_update(outputs);
    }

    pub fn set_is_enabled(&mut self, is_enabled: bool) {
        let outputs = self.engine.set_is_enabled(is_enabled);
        self.engine_did_update(outputs);
    }

    pub fn set_is_read_only(&mut self, is_read_only: bool) {
        let outputs = self.engine.set_is_read_only(is_read_only);
        self.engine_did_update(outputs);
    }

    pub fn set_clear_mode(&mut self, clear_mode: ClearMode) {
        if self.clear_mode == clear_mode {
            return;
        }
        self.clear_mode = clear_mode;
        self.update_clear_button();
    }

    pub fn set_left_addon_configuration(&mut self, configuration: AddonConfiguration) {
        if self.left_addon == configuration {
            return;
        }
        self.left_addon = configuration;
        self.refresh_addon_padding(AddonSide::Left);
    }

    pub fn set_right_addon_configuration(&mut self, configuration: AddonConfiguration) {
        if self.right_addon == configuration {
            return;
        }
        self.right_addon = configuration;
        self.refresh_addon_padding(AddonSide::Right);
    }

    fn engine_did_update(&mut self, outputs: Outputs) {
        if outputs.contains(Outputs::SPACINGS) {
            self.spacings_did_change();
        }
    }

    fn spacings_did_change(&mut self) {
        self.refresh_content_padding();
        self.refresh_sub_content_spacing();
        self.refresh_addon_padding(AddonSide::Left);
        self.refresh_addon_padding(AddonSide::Right);
    }

    fn recompute_field(&mut self) {
        self.refresh_clear_button();
        self.spacings_did_change();
    }

    /// Recompute the clear button, and the paddings around it if it flipped
    fn update_clear_button(&mut self) {
        let was_shown = *self.is_clear_button.get();
        if self.refresh_clear_button() != was_shown {
            tracing::trace!(clear_mode = ?self.clear_mode, "clear button visibility changed");
            self.refresh_content_padding();
            self.refresh_sub_content_spacing();
        }
    }

    fn refresh_clear_button(&mut self) -> bool {
        let shown = self
            .engine
            .use_cases()
            .is_clear_button(self.clear_mode, self.engine.is_focused());
        self.is_clear_button.set(shown);
        shown
    }

    fn refresh_content_padding(&mut self) {
        let padding = self
            .engine
            .use_cases()
            .content_padding(self.engine.spacings().get(), *self.is_clear_button.get());
        self.content_padding.set(padding);
    }

    fn refresh_sub_content_spacing(&mut self) {
        let spacing = self
            .engine
            .use_cases()
            .sub_content_spacing(self.engine.spacings().get(), *self.is_clear_button.get());
        self.sub_content_spacing.set(spacing);
    }

    fn refresh_addon_padding(&mut self, side: AddonSide) {
        let (configuration, target) = match side {
            AddonSide::Left => (&self.left_addon, &mut self.left_addon_padding),
            AddonSide::Right => (&self.right_addon, &mut self.right_addon_padding),
        };
        let padding =
            self.engine
                .use_cases()
                .addon_padding(self.engine.spacings().get(), configuration, side);
        target.set(padding);
    }
}

impl<U, S> TextFieldViewModel<U, S> {
    pub fn engine(&self) -> &StyleEngine<U, S> {
        &self.engine
    }

    pub fn theme(&self) -> &SharedTheme {
        self.engine.theme()
    }

    pub fn intent(&self) -> Intent {
        self.engine.intent()
    }

    pub fn border_style(&self) -> BorderStyle {
        self.engine.border_style()
    }

    pub fn is_focused(&self) -> bool {
        self.engine.is_focused()
    }

    pub fn is_enabled(&self) -> bool {
        self.engine.is_enabled()
    }

    pub fn is_read_only(&self) -> bool {
        self.engine.is_read_only()
    }

    pub fn clear_mode(&self) -> ClearMode {
        self.clear_mode
    }

    pub fn left_addon_configuration(&self) -> &AddonConfiguration {
        &self.left_addon
    }

    pub fn right_addon_configuration(&self) -> &AddonConfiguration {
        &self.right_addon
    }

    pub fn colors(&self) -> &Published<ColorSet> {
        self.engine.colors()
    }

    pub fn border_layout(&self) -> &Published<BorderLayout> {
        self.engine.border_layout()
    }

    pub fn dim(&self) -> &Published<f32> {
        self.engine.dim()
    }

    pub fn font(&self) -> &Published<FontToken> {
        self.engine.font()
    }

    pub fn spacings(&self) -> &Published<Spacings> {
        self.engine.spacings()
    }

    pub fn is_clear_button(&self) -> &Published<bool> {
        &self.is_clear_button
    }

    pub fn content_padding(&self) -> &Published<ContentPadding> {
        &self.content_padding
    }

    pub fn sub_content_spacing(&self) -> &Published<f32> {
        &self.sub_content_spacing
    }

    pub fn left_addon_padding(&self) -> &Published<EdgeInsets> {
        &self.left_addon_padding
    }

    pub fn right_addon_padding(&self) -> &Published<EdgeInsets> {
        &self.right_addon_padding
    }

    pub fn addon_padding(&self, side: AddonSide) -> &Published<EdgeInsets> {
        match side {
            AddonSide::Left => &self.left_addon_padding,
            AddonSide::Right => &self.right_addon_padding,
        }
    }
}
