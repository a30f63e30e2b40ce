//! UI Components
//!
//! Leptos components for each page plus the shared card pieces.

mod bin_page;
mod delete_confirm_button;
mod login;
mod note_card;
mod note_page;
mod note_text;
mod notes_page;
mod settings;
mod top_bar;
mod triaged_page;

pub use bin_page::BinPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login::{LoginPage, LogoutForm};
pub use note_card::NoteCard;
pub use note_page::NotePage;
pub use note_text::NoteText;
pub use notes_page::NotesPage;
pub use settings::SettingsPage;
pub use top_bar::TopBar;
pub use triaged_page::TriagedPage;
