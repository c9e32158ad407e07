// Export modules for use in tests
pub mod panic_handler;
pub mod selection;
pub mod settings;
pub mod store;
pub mod translation_cache;

pub use selection::{
    Block, PageText, Point, Rect, Selection, SelectionError, SelectionSession, Word, select,
};
pub use store::{JsonDocument, PageTextStore, TextSource};
pub use translation_cache::{TranslationCache, TranslationKey};
