//! Paging arrow state
//!
//! Everything the presentation layer needs to draw the two paging arrows:
//! visibility, autohide alpha, tap enablement, pressed styling and the chevron
//! outline. Drawing and fade animations stay with the presentation layer.

use std::time::Duration;

use scrollbar_model::{ArrowDirection, ArrowEnablement, Point, Rect};

use crate::constants::arrows::{
    HOVER_FADE_MS, LINE_WIDTH, MAX_CHEVRON_HEIGHT, MAX_CHEVRON_WIDTH,
};

/// Stroke style of an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowStyle {
    Pressed,
    Normal,
    Disabled,
}

impl ArrowStyle {
    pub fn line_width(&self) -> f64 {
        match self {
            Self::Pressed => LINE_WIDTH + 1.0,
            Self::Normal | Self::Disabled => LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowState {
    pub direction: ArrowDirection,
    /// Accepts taps; follows the scroll position.
    pub enabled: bool,
    /// Hidden arrows are neither drawn nor tappable.
    pub visible: bool,
    /// 0 while autohidden, 1 otherwise.
    pub alpha: f64,
    /// A touch is currently down on the arrow.
    pub pressed: bool,
}

impl ArrowState {
    pub fn new(direction: ArrowDirection) -> Self {
        Self {
            direction,
            enabled: true,
            visible: true,
            alpha: 1.0,
            pressed: false,
        }
    }

    pub fn style(&self) -> ArrowStyle {
        if self.pressed {
            ArrowStyle::Pressed
        } else if self.enabled {
            ArrowStyle::Normal
        } else {
            ArrowStyle::Disabled
        }
    }

    pub fn accepts_taps(&self) -> bool {
        self.visible && self.enabled
    }
}

/// Pointer hover phases reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Alpha fade the presentation layer should run on both arrows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowFade {
    pub target_alpha: f64,
    pub duration: Duration,
    /// Start from the currently displayed alpha, interrupting any running fade.
    pub begin_from_current_state: bool,
}

/// The left/right arrow pair of one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagingArrows {
    pub left: ArrowState,
    pub right: ArrowState,
    shows_arrows: bool,
    autohide: bool,
}

impl PagingArrows {
    pub fn new(shows_arrows: bool, autohide: bool) -> Self {
        let mut arrows = Self {
            left: ArrowState::new(ArrowDirection::Left),
            right: ArrowState::new(ArrowDirection::Right),
            shows_arrows,
            autohide,
        };
        arrows.set_shows_arrows(shows_arrows);
        arrows.set_autohide(autohide);
        arrows
    }

    pub fn get(&self, direction: ArrowDirection) -> &ArrowState {
        match direction {
            ArrowDirection::Left => &self.left,
            ArrowDirection::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, direction: ArrowDirection) -> &mut ArrowState {
        match direction {
            ArrowDirection::Left => &mut self.left,
            ArrowDirection::Right => &mut self.right,
        }
    }

    pub fn shows_arrows(&self) -> bool {
        self.shows_arrows
    }

    pub fn autohide(&self) -> bool {
        self.autohide
    }

    pub fn set_shows_arrows(&mut self, shows_arrows: bool) {
        self.shows_arrows = shows_arrows;
        self.left.visible = shows_arrows;
        self.right.visible = shows_arrows;
    }

    pub fn set_autohide(&mut self, autohide: bool) {
        self.autohide = autohide;
        let alpha = if autohide { 0.0 } else { 1.0 };
        self.left.alpha = alpha;
        self.right.alpha = alpha;
    }

    pub fn apply_enablement(&mut self, enablement: ArrowEnablement) {
        self.left.enabled = enablement.left;
        self.right.enabled = enablement.right;
    }

    pub fn enablement(&self) -> ArrowEnablement {
        ArrowEnablement {
            left: self.left.enabled,
            right: self.right.enabled,
        }
    }

    /// React to pointer hover. Returns the fade to run, or `None` when the
    /// arrows are not autohidden or not shown at all.
    pub fn hover(&mut self, phase: HoverPhase) -> Option<ArrowFade> {
        if !(self.autohide && self.shows_arrows) {
            return None;
        }
        let target_alpha = match phase {
            HoverPhase::Began | HoverPhase::Changed => 1.0,
            HoverPhase::Ended | HoverPhase::Cancelled => 0.0,
        };
        self.left.alpha = target_alpha;
        self.right.alpha = target_alpha;
        Some(ArrowFade {
            target_alpha,
            duration: Duration::from_millis(HOVER_FADE_MS),
            begin_from_current_state: true,
        })
    }
}

/// The three points of a chevron drawn inside `rect`, pointing in
/// `direction`. The chevron is at most 14x50 and centred in the rect.
pub fn chevron_points(direction: ArrowDirection, rect: Rect) -> [Point; 3] {
    let height = rect.height().min(MAX_CHEVRON_HEIGHT);
    let width = rect.width().min(MAX_CHEVRON_WIDTH);
    let top = rect.min_y() + (rect.height() - height) / 2.0;
    let near = rect.min_x() + (rect.width() - width) / 2.0;
    let far = near + width;
    let middle = top + height / 2.0;
    let bottom = top + height;

    match direction {
        ArrowDirection::Left => [
            Point::new(far, top),
            Point::new(near, middle),
            Point::new(far, bottom),
        ],
        ArrowDirection::Right => [
            Point::new(near, top),
            Point::new(far, middle),
            Point::new(near, bottom),
        ],
    }
}
