//! Bin Commands

use crate::models::Note;
use crate::store::Action;
use super::{Api, Result};

impl Api {
    pub async fn unbin_note(&self, note: Note) -> Result<Action> {
        self.post_discard(&format!("bin/{}/unbin", note.id), &note).await?;
        Ok(Action::NoteUnbinned { note })
    }

    /// Permanently delete one binned note
    pub async fn delete_note(&self, note: Note) -> Result<Action> {
        self.delete(&format!("bin/{}", note.id)).await?;
        Ok(Action::NoteDeleted { note })
    }

    pub async fn empty_bin(&self) -> Result<Action> {
        self.delete("bin").await?;
        Ok(Action::BinEmptied)
    }
}
