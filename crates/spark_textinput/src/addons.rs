//! Text field embedded in an addon container
//!
//! When a field sits between left/right addons, the container draws the
//! shared background and applies the dim. The inner field keeps using the
//! same derivations, but its background reads clear and its dim reads 1.0;
//! the derived values are published as `addons_background` / `addons_dim`.

use spark_core::Published;
use spark_theme::AnyColorToken;

use crate::engine::ContainerSurface;
use crate::field::{TextFieldInputs, TextFieldViewModel};
use crate::types::EdgeSpacings;
use crate::use_cases::{DefaultStyleUseCases, StyleUseCases};

pub struct TextFieldAddonsViewModel<U = DefaultStyleUseCases> {
    field: TextFieldViewModel<U, ContainerSurface>,
}

impl TextFieldAddonsViewModel {
    pub fn new(inputs: TextFieldInputs) -> Self {
        Self::with_use_cases(inputs, DefaultStyleUseCases)
    }
}

impl<U: StyleUseCases> TextFieldAddonsViewModel<U> {
    pub fn with_use_cases(inputs: TextFieldInputs, use_cases: U) -> Self {
        Self {
            field: TextFieldViewModel::with_parts(inputs, use_cases, ContainerSurface::new()),
        }
    }

    /// Replace every input and recompute every output
    pub fn update_all(&mut self, inputs: TextFieldInputs) {
        self.field.update_all(inputs);
    }

    /// The inner field, for mutating its inputs
    pub fn field_mut(&mut self) -> &mut TextFieldViewModel<U, ContainerSurface> {
        &mut self.field
    }
}

impl<U> TextFieldAddonsViewModel<U> {
    pub fn field(&self) -> &TextFieldViewModel<U, ContainerSurface> {
        &self.field
    }

    /// Background drawn by the container
    pub fn addons_background(&self) -> &Published<AnyColorToken> {
        self.field.engine().surface().background()
    }

    /// Opacity applied by the container
    pub fn addons_dim(&self) -> &Published<f32> {
        self.field.engine().surface().dim()
    }

    /// Container spacing around and between the addons
    pub fn edge_spacings(&self) -> EdgeSpacings {
        self.field.spacings().get().edges()
    }
}
