//! Dashboard glue surrounding the speed test
//!
//! Deliberately thin: clock, bookmark list, persisted notes, and search are
//! kept as small wrappers, not components.

pub mod bookmarks;
pub mod clock;
pub mod notes;
pub mod search;

pub use bookmarks::{load_bookmarks, render_bookmarks, Bookmark, BOOKMARKS_UNAVAILABLE};
pub use clock::current_time_string;
pub use notes::NotesStore;
pub use search::{KeyPress, SearchForm};
