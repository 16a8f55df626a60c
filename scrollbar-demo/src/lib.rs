//! Headless rendition of the scrollbar demo screen: a fixed-width text
//! carousel above a paged image carousel, driven by a scripted session.

pub mod items;
pub mod screen;
pub mod session;

pub use screen::{CarouselSummary, DemoScreen, ScreenSummary};
pub use session::{SessionReport, SessionStep};
