//! Note Commands
//!
//! Listing fetches and the moves between notes and triaged.

use crate::models::{Category, Key, Note, ProtoNote};
use crate::store::{Action, Bucket};
use super::{Api, Result};

impl Api {
    /// Full listing of one bucket, used for the initial load and refreshes
    pub async fn fetch_listing(&self, bucket: Bucket) -> Result<Action> {
        let listing: Vec<Note> = self.get(bucket.as_str()).await?;
        Ok(Action::ListingSet { resource: bucket, listing })
    }

    pub async fn create_note(&self, proto: &ProtoNote) -> Result<Action> {
        let note: Note = self.post("notes", proto).await?;
        Ok(Action::ListingNoteAppended { note })
    }

    /// Edits go through `/notes` whichever bucket the note is in
    pub async fn edit_note(&self, id: Key, proto: &ProtoNote) -> Result<Action> {
        let note: Note = self.put(&format!("notes/{}", id), proto).await?;
        Ok(Action::NoteContentUpdated { note })
    }

    pub async fn triage_note(&self, id: Key, category: &Category) -> Result<Action> {
        let note: Note = self.post(&format!("notes/{}/triage", id), category).await?;
        Ok(Action::NoteTriaged { note })
    }

    pub async fn untriage_note(&self, id: Key) -> Result<Action> {
        let note: Note = self.post(&format!("triaged/{}/untriage", id), &serde_json::json!({})).await?;
        Ok(Action::NoteUntriaged { note })
    }

    /// Bin a note from `notes` or `triaged`. Binning an already binned note
    /// is a no-op on the client.
    pub async fn bin_note(&self, from: Bucket, note: Note) -> Result<Action> {
        if from != Bucket::Bin {
            self.post_discard(&bin_path(from, note.id), &serde_json::json!({})).await?;
        }
        Ok(Action::NoteBinned { note })
    }
}

fn bin_path(from: Bucket, id: Key) -> String {
    format!("{}/{}/bin", from.as_str(), id)
}
