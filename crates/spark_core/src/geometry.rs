//! Directional edge insets

/// Insets along the four edges of a rectangle (leading/trailing follow the
/// layout direction)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Insets on the horizontal edges only
    pub const fn horizontal(leading: f32, trailing: f32) -> Self {
        Self::new(0.0, leading, 0.0, trailing)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
