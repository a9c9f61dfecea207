mod card;
mod contact;
mod cursor;
mod loading;
mod theme;

pub use card::{
    card_size, compute_tilt, CardFace, CardRect, FlipState, Pointer, Tilt, FLIP_DURATION,
    SMALL_VIEWPORT_QUERY, TILT_MULTIPLIER,
};
pub use contact::{ContactField, ContactForm};
pub use cursor::{CursorMode, CursorState, RingGeometry, DOT_SIZE};
pub use loading::{LoadPhase, LoadingPlan};
pub use theme::{Theme, ThemeParseError, ThemeSetting, PREFERS_DARK_QUERY};
