/// Which paging arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArrowDirection {
    Left,
    Right,
}

impl ArrowDirection {
    /// Velocity sign used when the arrow drives the pagination engine.
    pub fn velocity(&self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Whether each paging arrow accepts taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowEnablement {
    pub left: bool,
    pub right: bool,
}

impl ArrowEnablement {
    pub const DISABLED: ArrowEnablement = ArrowEnablement {
        left: false,
        right: false,
    };
}
