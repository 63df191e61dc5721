//! View-model scenarios
//!
//! A counting [`StyleUseCases`] records how often each derivation runs so the
//! tests can assert that a change recomputes exactly its dependents.

use std::cell::Cell;

use spark_core::EdgeInsets;
use spark_theme::{ColorTokenExt, FontToken, SharedTheme, Theme};

use crate::prelude::*;
use crate::types::{BorderLayout, ColorSet, ContentPadding, Spacings};
use crate::use_cases::{self, StyleUseCases};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct CountingUseCases {
    border_layout: Cell<usize>,
    colors: Cell<usize>,
    dim: Cell<usize>,
    font: Cell<usize>,
    spacings: Cell<usize>,
    is_clear_button: Cell<usize>,
    content_padding: Cell<usize>,
    addon_padding: Cell<usize>,
}

#[derive(Debug, PartialEq, Eq)]
struct Calls {
    border_layout: usize,
    colors: usize,
    dim: usize,
    font: usize,
    spacings: usize,
    is_clear_button: usize,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl CountingUseCases {
    fn calls(&self) -> Calls {
        Calls {
            border_layout: self.border_layout.get(),
            colors: self.colors.get(),
            dim: self.dim.get(),
            font: self.font.get(),
            spacings: self.spacings.get(),
            is_clear_button: self.is_clear_button.get(),
        }
    }

    fn reset(&self) {
        for counter in [
            &self.border_layout,
            &self.colors,
            &self.dim,
            &self.font,
            &self.spacings,
            &self.is_clear_button,
            &self.content_padding,
            &self.addon_padding,
        ] {
            counter.set(0);
        }
    }
}

impl StyleUseCases for CountingUseCases {
    fn border_layout(
        &self,
        theme: &Theme,
        border_style: BorderStyle,
        is_focused: bool,
    ) -> BorderLayout {
        bump(&self.border_layout);
        use_cases::border_layout(theme, border_style, is_focused)
    }

    fn colors(
        &self,
        theme: &Theme,
        intent: Intent,
        is_focused: bool,
        is_enabled: bool,
        is_read_only: bool,
    ) -> ColorSet {
        bump(&self.colors);
        use_cases::colors(theme, intent, is_focused, is_enabled, is_read_only)
    }

    fn dim(&self, theme: &Theme, is_enabled: bool) -> f32 {
        bump(&self.dim);
        use_cases::dim(theme, is_enabled)
    }

    fn font(&self, theme: &Theme) -> FontToken {
        bump(&self.font);
        use_cases::font(theme)
    }

    fn spacings(&self, theme: &Theme, border_style: BorderStyle) -> Spacings {
        bump(&self.spacings);
        use_cases::spacings(theme, border_style)
    }

    fn is_clear_button(&self, clear_mode: ClearMode, is_focused: bool) -> bool {
        bump(&self.is_clear_button);
        use_cases::is_clear_button(clear_mode, is_focused)
    }

    fn content_padding(&self, spacings: &Spacings, is_clear_button: bool) -> ContentPadding {
        bump(&self.content_padding);
        use_cases::content_padding(spacings, is_clear_button)
    }

    fn addon_padding(
        &self,
        spacings: &Spacings,
        configuration: &AddonConfiguration,
        side: AddonSide,
    ) -> EdgeInsets {
        bump(&self.addon_padding);
        use_cases::addon_padding(spacings, configuration, side)
    }
}

fn baseline_inputs(theme: SharedTheme) -> TextFieldInputs {
    TextFieldInputs::new(theme)
        .intent(Intent::Neutral)
        .border_style(BorderStyle::RoundedRect)
        .read_only(false)
        .clear_mode(ClearMode::Never)
        .focused(false)
        .enabled(true)
}

fn counted_field(theme: SharedTheme) -> TextFieldViewModel<CountingUseCases> {
    let field =
        TextFieldViewModel::with_use_cases(baseline_inputs(theme), CountingUseCases::default());
    field.engine().use_cases().reset();
    field
}

fn no_calls() -> Calls {
    Calls {
        border_layout: 0,
        colors: 0,
        dim: 0,
        font: 0,
        spacings: 0,
        is_clear_button: 0,
    }
}

#[test]
fn test_bulk_update_computes_everything_once() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut field = TextFieldViewModel::with_use_cases(
        baseline_inputs(theme.clone()),
        CountingUseCases::default(),
    );

    let once = Calls {
        border_layout: 1,
        colors: 1,
        dim: 1,
        font: 1,
        spacings: 1,
        is_clear_button: 1,
    };
    assert_eq!(field.engine().use_cases().calls(), once);

    field.engine().use_cases().reset();
    field.update_all(baseline_inputs(theme));
    assert_eq!(field.engine().use_cases().calls(), once);
}

#[test]
fn test_initial_state() {
    init_tracing();
    let theme = Theme::light().shared();
    let field = counted_field(theme.clone());

    assert!(!*field.is_clear_button().get());
    assert_eq!(field.border_layout().get().width, theme.border.width.small);
    assert!(field
        .colors()
        .get()
        .border
        .token_eq(&theme.colors.base.outline));
}

#[test]
fn test_focus_recomputes_only_its_dependents() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut field = counted_field(theme.clone());

    field.set_is_focused(true);

    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            border_layout: 1,
            colors: 1,
            is_clear_button: 1,
            ..no_calls()
        }
    );
    assert_eq!(field.border_layout().get().width, theme.border.width.medium);
    assert!(field
        .colors()
        .get()
        .border
        .token_eq(&theme.colors.base.outline_high));
    // Clear mode is `never`, so nothing around the clear button moved
    assert_eq!(field.engine().use_cases().content_padding.get(), 0);
}

#[test]
fn test_theme_change_recomputes_theme_dependents() {
    init_tracing();
    let mut field = counted_field(Theme::light().shared());
    let dark = Theme::dark().shared();

    field.set_theme(dark.clone());

    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            border_layout: 1,
            colors: 1,
            dim: 1,
            font: 1,
            spacings: 1,
            is_clear_button: 0,
        }
    );
    assert_eq!(
        *field.colors().get(),
        use_cases::colors(&dark, Intent::Neutral, false, true, false)
    );
    assert_eq!(*field.font().get(), dark.typography.body1);
    // Spacings changed, so their dependents followed
    let counters = field.engine().use_cases();
    assert_eq!(counters.content_padding.get(), 1);
    assert_eq!(counters.addon_padding.get(), 2);
}

#[test]
fn test_same_value_triggers_nothing() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut field = counted_field(theme.clone());

    field.set_theme(theme);
    field.set_intent(Intent::Neutral);
    field.set_border_style(BorderStyle::RoundedRect);
    field.set_is_focused(false);
    field.set_is_enabled(true);
    field.set_is_read_only(false);
    field.set_clear_mode(ClearMode::Never);
    field.set_left_addon_configuration(AddonConfiguration::default());
    field.set_right_addon_configuration(AddonConfiguration::default());

    let counters = field.engine().use_cases();
    assert_eq!(counters.calls(), no_calls());
    assert_eq!(counters.content_padding.get(), 0);
    assert_eq!(counters.addon_padding.get(), 0);
}

#[test]
fn test_single_input_dependencies() {
    init_tracing();
    let mut field = counted_field(Theme::light().shared());

    field.set_intent(Intent::Success);
    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            colors: 1,
            ..no_calls()
        }
    );

    field.engine().use_cases().reset();
    field.set_is_enabled(false);
    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            colors: 1,
            dim: 1,
            ..no_calls()
        }
    );

    field.engine().use_cases().reset();
    field.set_is_read_only(true);
    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            colors: 1,
            ..no_calls()
        }
    );

    field.engine().use_cases().reset();
    field.set_border_style(BorderStyle::None);
    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            border_layout: 1,
            spacings: 1,
            ..no_calls()
        }
    );

    field.engine().use_cases().reset();
    field.set_clear_mode(ClearMode::Always);
    assert_eq!(
        field.engine().use_cases().calls(),
        Calls {
            is_clear_button: 1,
            ..no_calls()
        }
    );
    assert_eq!(field.engine().use_cases().content_padding.get(), 1);

    field.engine().use_cases().reset();
    field.set_left_addon_configuration(AddonConfiguration::default().with_padding(true));
    assert_eq!(field.engine().use_cases().calls(), no_calls());
    assert_eq!(field.engine().use_cases().addon_padding.get(), 1);
}

#[test]
fn test_focus_with_while_editing_moves_content_padding() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut field = TextFieldViewModel::with_use_cases(
        baseline_inputs(theme.clone()).clear_mode(ClearMode::WhileEditing),
        CountingUseCases::default(),
    );
    field.engine().use_cases().reset();

    let paddings = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let paddings_clone = paddings.clone();
    let _sub = field
        .content_padding()
        .subscribe(move |padding: &ContentPadding| {
            paddings_clone.borrow_mut().push(padding.input_trailing)
        });

    field.set_is_focused(true);
    field.set_is_focused(false);

    assert_eq!(*paddings.borrow(), vec![0.0, theme.layout.spacing.large]);
    assert_eq!(field.engine().use_cases().is_clear_button.get(), 2);
}

#[test]
fn test_observers_see_consistent_outputs() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut field = TextFieldViewModel::new(baseline_inputs(theme.clone()));

    let seen = std::rc::Rc::new(Cell::new(0.0f32));
    let seen_clone = seen.clone();
    let _sub = field.dim().subscribe(move |dim| seen_clone.set(*dim));

    field.set_is_enabled(false);
    assert_eq!(seen.get(), theme.dims.dim3);
    assert_eq!(*field.dim().get(), theme.dims.dim3);
}

#[test]
fn test_addons_redirect_keeps_derivations() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut addons = TextFieldAddonsViewModel::with_use_cases(
        baseline_inputs(theme.clone()),
        CountingUseCases::default(),
    );
    addons.field().engine().use_cases().reset();

    addons.field_mut().set_is_enabled(false);

    assert_eq!(
        addons.field().engine().use_cases().calls(),
        Calls {
            colors: 1,
            dim: 1,
            ..no_calls()
        }
    );
    assert_eq!(*addons.field().dim().get(), 1.0);
    assert_eq!(*addons.addons_dim().get(), theme.dims.dim3);
}

#[test]
fn test_editor_recomputation() {
    init_tracing();
    let theme = Theme::light().shared();
    let mut editor = TextEditorViewModel::with_use_cases(
        StyleInputs::new(theme.clone()),
        CountingUseCases::default(),
    );
    assert_eq!(editor_calls(&editor).font, 1);

    editor.engine().use_cases().reset();
    editor.set_is_focused(true);
    assert_eq!(
        editor_calls(&editor),
        Calls {
            border_layout: 1,
            colors: 1,
            ..no_calls()
        }
    );

    editor.set_theme(Theme::dark().shared());
    assert_eq!(*editor.vertical_spacing_trigger().get(), 2);
}

fn editor_calls(editor: &TextEditorViewModel<CountingUseCases>) -> Calls {
    editor.engine().use_cases().calls()
}
