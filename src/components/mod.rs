mod business_card;
mod custom_cursor;
mod glyph;
mod loader;
mod page_header;
mod theme_toggle;

pub use business_card::BusinessCard;
pub use custom_cursor::CustomCursor;
pub use glyph::Glyph;
pub use loader::{Loader, LoadingScreen};
pub use page_header::PageHeader;
pub use theme_toggle::ThemeToggle;
