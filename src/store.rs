//! Listing Store
//!
//! Client-visible state and the single transition function that folds
//! confirmed actions into it. The reactive wrapper lives in `context`;
//! everything here is plain data so it can be tested natively.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Key, Note, User};
use crate::routes;

/// One of the three mutually exclusive note lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Notes,
    Triaged,
    Bin,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Notes, Bucket::Triaged, Bucket::Bin];

    /// Resource name used in `/api/<name>` and page paths
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Notes => "notes",
            Bucket::Triaged => "triaged",
            Bucket::Bin => "bin",
        }
    }
}

/// Per-bucket listings. `None` means not fetched yet, which is distinct
/// from a fetched empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listings {
    notes: Option<Vec<Note>>,
    triaged: Option<Vec<Note>>,
    bin: Option<Vec<Note>>,
}

impl Listings {
    pub fn get(&self, bucket: Bucket) -> Option<&[Note]> {
        self.slot(bucket).as_deref()
    }

    pub fn is_loaded(&self, bucket: Bucket) -> bool {
        self.slot(bucket).is_some()
    }

    /// Locate a note by id across all buckets
    pub fn find(&self, id: Key) -> Option<(Bucket, &Note)> {
        Bucket::ALL.into_iter().find_map(|bucket| {
            self.get(bucket)
                .and_then(|notes| notes.iter().find(|n| n.id == id))
                .map(|note| (bucket, note))
        })
    }

    pub fn contains(&self, id: Key) -> bool {
        self.find(id).is_some()
    }

    /// Triaged notes in one category, in listing order
    pub fn triaged_in(&self, category_id: Key) -> Vec<Note> {
        self.get(Bucket::Triaged)
            .unwrap_or_default()
            .iter()
            .filter(|n| n.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    fn slot(&self, bucket: Bucket) -> &Option<Vec<Note>> {
        match bucket {
            Bucket::Notes => &self.notes,
            Bucket::Triaged => &self.triaged,
            Bucket::Bin => &self.bin,
        }
    }

    fn slot_mut(&mut self, bucket: Bucket) -> &mut Option<Vec<Note>> {
        match bucket {
            Bucket::Notes => &mut self.notes,
            Bucket::Triaged => &mut self.triaged,
            Bucket::Bin => &mut self.bin,
        }
    }

    /// No-op for unloaded buckets and absent ids
    fn remove(&mut self, bucket: Bucket, id: Key) {
        if let Some(notes) = self.slot_mut(bucket) {
            notes.retain(|n| n.id != id);
        }
    }

    fn remove_everywhere(&mut self, id: Key) {
        for bucket in Bucket::ALL {
            self.remove(bucket, id);
        }
    }

    /// Load-guard: an unloaded bucket is left unloaded rather than seeded
    /// with a single note that would hide the pending full fetch.
    fn prepend_if_loaded(&mut self, bucket: Bucket, note: Note) {
        if let Some(notes) = self.slot_mut(bucket) {
            notes.insert(0, note);
        }
    }

    fn move_to(&mut self, bucket: Bucket, note: Note) {
        self.remove_everywhere(note.id);
        self.prepend_if_loaded(bucket, note);
    }

    /// A fetched listing is authoritative: its ids leave the other buckets.
    fn replace(&mut self, bucket: Bucket, listing: Vec<Note>) {
        let mut seen = std::collections::HashSet::new();
        let listing: Vec<Note> = listing.into_iter().filter(|n| seen.insert(n.id)).collect();

        for other in Bucket::ALL.into_iter().filter(|b| *b != bucket) {
            if let Some(notes) = self.slot_mut(other) {
                notes.retain(|n| !seen.contains(&n.id));
            }
        }
        *self.slot_mut(bucket) = Some(listing);
    }

    fn update_content(&mut self, updated: &Note) {
        for bucket in Bucket::ALL {
            let found = self
                .slot_mut(bucket)
                .as_mut()
                .and_then(|notes| notes.iter_mut().find(|n| n.id == updated.id));
            if let Some(note) = found {
                note.title = updated.title.clone();
                note.content = updated.content.clone();
                return;
            }
        }
    }
}

/// Global application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ClientState {
    pub user: Option<User>,
    pub categories: Vec<Category>,
    /// Highlighted top-bar item, derived from the current path
    pub active_view: Option<Bucket>,
    /// Category that the notes page triages into
    pub triage_selection: Option<Category>,
    pub listings: Listings,
}

/// Confirmed state transitions, one per server response or UI event.
///
/// Wire shape is an object with a `type` tag, e.g.
/// `{"type":"note-triaged","note":{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    #[serde(alias = "user-set")]
    SetUser {
        #[serde(default)]
        user: Option<User>,
    },
    #[serde(alias = "categories-set")]
    SetCategories { categories: Vec<Category> },
    CategoryDeleted {
        #[serde(rename = "deletedCategory")]
        deleted_category: Category,
    },
    RouteChanged { url: String },
    ListingSet { resource: Bucket, listing: Vec<Note> },
    ListingNoteAppended { note: Note },
    NoteTriaged { note: Note },
    NoteUntriaged { note: Note },
    NoteBinned { note: Note },
    NoteUnbinned { note: Note },
    NoteDeleted { note: Note },
    BinEmptied,
    NoteContentUpdated { note: Note },
    TriageCategorySet {
        #[serde(rename = "triageCategory", default)]
        triage_category: Option<Category>,
    },
    /// Logout: drop everything that belonged to the previous user
    SessionEnded,
    /// Any tag this client does not know; applied as the identity
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// A confirmed login or registration
    pub fn starts_session(&self) -> bool {
        matches!(self, Action::SetUser { user: Some(_) })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetUser { .. } => "set-user",
            Action::SetCategories { .. } => "set-categories",
            Action::CategoryDeleted { .. } => "category-deleted",
            Action::RouteChanged { .. } => "route-changed",
            Action::ListingSet { .. } => "listing-set",
            Action::ListingNoteAppended { .. } => "listing-note-appended",
            Action::NoteTriaged { .. } => "note-triaged",
            Action::NoteUntriaged { .. } => "note-untriaged",
            Action::NoteBinned { .. } => "note-binned",
            Action::NoteUnbinned { .. } => "note-unbinned",
            Action::NoteDeleted { .. } => "note-deleted",
            Action::BinEmptied => "bin-emptied",
            Action::NoteContentUpdated { .. } => "note-content-updated",
            Action::TriageCategorySet { .. } => "triage-category-set",
            Action::SessionEnded => "session-ended",
            Action::Unrecognized => "unrecognized",
        }
    }
}

/// Where an unbinned note goes back to.
///
/// Heuristic: a note with a category is assumed to have come from `triaged`.
/// The server does not report the bin's origin bucket.
fn unbin_target(note: &Note) -> Bucket {
    if note.is_triaged() {
        Bucket::Triaged
    } else {
        Bucket::Notes
    }
}

/// Fold one action into the state. Total: never fails, never performs I/O.
pub fn apply(mut state: ClientState, action: Action) -> ClientState {
    match action {
        Action::SetUser { user } => state.user = user,
        Action::SetCategories { categories } => state.categories = categories,
        Action::CategoryDeleted { deleted_category } => {
            state.categories.retain(|c| c.id != deleted_category.id);
            if state
                .triage_selection
                .as_ref()
                .is_some_and(|c| c.id == deleted_category.id)
            {
                state.triage_selection = None;
            }
        }
        Action::RouteChanged { url } => state.active_view = routes::active_view(&url),
        Action::ListingSet { resource, listing } => state.listings.replace(resource, listing),
        Action::ListingNoteAppended { note } => {
            if !state.listings.contains(note.id) {
                state
                    .listings
                    .slot_mut(Bucket::Notes)
                    .get_or_insert_with(Vec::new)
                    .insert(0, note);
            }
        }
        Action::NoteTriaged { note } => state.listings.move_to(Bucket::Triaged, note),
        Action::NoteUntriaged { note } => state.listings.move_to(Bucket::Notes, note),
        Action::NoteBinned { note } => state.listings.move_to(Bucket::Bin, note),
        Action::NoteUnbinned { note } => {
            let target = unbin_target(&note);
            state.listings.move_to(target, note);
        }
        Action::NoteDeleted { note } => state.listings.remove_everywhere(note.id),
        Action::BinEmptied => *state.listings.slot_mut(Bucket::Bin) = Some(Vec::new()),
        Action::NoteContentUpdated { note } => state.listings.update_content(&note),
        Action::TriageCategorySet { triage_category } => state.triage_selection = triage_category,
        Action::SessionEnded => {
            state = ClientState {
                active_view: state.active_view,
                ..ClientState::default()
            };
        }
        Action::Unrecognized => {}
    }
    state
}

/// Type alias for the store
pub type AppStore = Store<ClientState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: Key) -> Note {
        Note {
            id,
            title: format!("Note {}", id),
            content: format!("content {}", id),
            category_id: None,
        }
    }

    fn triaged_note(id: Key, category_id: Key) -> Note {
        Note { category_id: Some(category_id), ..note(id) }
    }

    fn category(id: Key, title: &str) -> Category {
        Category { id, title: title.to_string() }
    }

    fn loaded(notes: Vec<Note>, triaged: Vec<Note>, bin: Vec<Note>) -> ClientState {
        ClientState {
            listings: Listings {
                notes: Some(notes),
                triaged: Some(triaged),
                bin: Some(bin),
            },
            ..ClientState::default()
        }
    }

    fn ids(state: &ClientState, bucket: Bucket) -> Option<Vec<Key>> {
        state.listings.get(bucket).map(|ns| ns.iter().map(|n| n.id).collect())
    }

    // ========================
    // Scenarios
    // ========================

    #[test]
    fn test_append_to_empty_notes() {
        let state = ClientState {
            listings: Listings { notes: Some(vec![]), ..Listings::default() },
            ..ClientState::default()
        };
        let n = Note { id: 1, title: "T".into(), content: "C".into(), category_id: None };
        let state = apply(state, Action::ListingNoteAppended { note: n.clone() });
        assert_eq!(state.listings.get(Bucket::Notes), Some(&[n][..]));
    }

    #[test]
    fn test_triage_moves_note_out_of_notes() {
        let state = loaded(vec![note(1)], vec![], vec![]);
        let state = apply(state, Action::NoteTriaged { note: triaged_note(1, 5) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![]));
        assert_eq!(state.listings.get(Bucket::Triaged), Some(&[triaged_note(1, 5)][..]));
    }

    #[test]
    fn test_unbin_without_category_returns_to_notes() {
        let state = loaded(vec![], vec![], vec![note(2)]);
        let state = apply(state, Action::NoteUnbinned { note: note(2) });
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![]));
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![2]));
        assert_eq!(ids(&state, Bucket::Triaged), Some(vec![]));
    }

    #[test]
    fn test_unbin_with_category_returns_to_triaged() {
        let state = loaded(vec![], vec![triaged_note(9, 1)], vec![triaged_note(2, 1)]);
        let state = apply(state, Action::NoteUnbinned { note: triaged_note(2, 1) });
        assert_eq!(ids(&state, Bucket::Triaged), Some(vec![2, 9]));
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![]));
    }

    #[test]
    fn test_empty_bin() {
        let state = loaded(vec![], vec![], vec![note(3), note(4)]);
        let state = apply(state, Action::BinEmptied);
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![]));
    }

    #[test]
    fn test_empty_bin_marks_unloaded_bin_as_loaded() {
        let state = apply(ClientState::default(), Action::BinEmptied);
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![]));
    }

    #[test]
    fn test_category_deleted() {
        let state = ClientState {
            categories: vec![category(1, "Work")],
            ..ClientState::default()
        };
        let state = apply(state, Action::CategoryDeleted { deleted_category: category(1, "Work") });
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_category_deleted_clears_matching_selection() {
        let state = ClientState {
            categories: vec![category(1, "Work"), category(2, "Home")],
            triage_selection: Some(category(1, "Work")),
            ..ClientState::default()
        };
        let state = apply(state, Action::CategoryDeleted { deleted_category: category(1, "Work") });
        assert_eq!(state.categories, vec![category(2, "Home")]);
        assert_eq!(state.triage_selection, None);

        let state = apply(state, Action::TriageCategorySet { triage_category: Some(category(2, "Home")) });
        let state = apply(state, Action::CategoryDeleted { deleted_category: category(7, "Gone") });
        assert_eq!(state.triage_selection, Some(category(2, "Home")));
    }

    // ========================
    // Properties
    // ========================

    #[test]
    fn test_triage_untriage_round_trip() {
        let state = loaded(vec![note(2), note(1), note(3)], vec![triaged_note(8, 4)], vec![]);
        let state = apply(state, Action::NoteTriaged { note: triaged_note(1, 4) });
        let state = apply(state, Action::NoteUntriaged { note: note(1) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![1, 2, 3]));
        assert_eq!(ids(&state, Bucket::Triaged), Some(vec![8]));
    }

    #[test]
    fn test_unrecognized_action_is_identity() {
        let state = loaded(vec![note(1)], vec![triaged_note(2, 1)], vec![note(3)]);
        let state = ClientState {
            user: Some(User { username: "u".into(), email: "e".into(), admin: None }),
            categories: vec![category(1, "Work")],
            active_view: Some(Bucket::Bin),
            ..state
        };
        assert_eq!(apply(state.clone(), Action::Unrecognized), state);

        let action: Action = serde_json::from_str(r#"{"type":"settings-hue-delta","value":3}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
        assert_eq!(apply(state.clone(), action), state);
    }

    #[test]
    fn test_load_guard_keeps_sentinel() {
        let state = ClientState {
            listings: Listings { notes: Some(vec![note(1)]), ..Listings::default() },
            ..ClientState::default()
        };
        let state = apply(state, Action::NoteTriaged { note: triaged_note(1, 5) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![]));
        assert!(!state.listings.is_loaded(Bucket::Triaged));

        let state = apply(state, Action::NoteBinned { note: note(4) });
        assert!(!state.listings.is_loaded(Bucket::Bin));

        let state = apply(state, Action::NoteUnbinned { note: note(4) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![4]));
    }

    #[test]
    fn test_load_guard_on_notes_target() {
        let state = ClientState {
            listings: Listings { triaged: Some(vec![triaged_note(1, 5)]), bin: Some(vec![note(2)]), ..Listings::default() },
            ..ClientState::default()
        };

        let state = apply(state, Action::NoteUntriaged { note: note(1) });
        assert!(!state.listings.is_loaded(Bucket::Notes));
        assert_eq!(ids(&state, Bucket::Triaged), Some(vec![]));

        let state = apply(state, Action::NoteUnbinned { note: note(2) });
        assert!(!state.listings.is_loaded(Bucket::Notes));
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![]));
    }

    #[test]
    fn test_load_guard_on_unbin_to_triaged() {
        let state = ClientState {
            listings: Listings { notes: Some(vec![]), bin: Some(vec![triaged_note(3, 7)]), ..Listings::default() },
            ..ClientState::default()
        };
        let state = apply(state, Action::NoteUnbinned { note: triaged_note(3, 7) });
        assert!(!state.listings.is_loaded(Bucket::Triaged));
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![]));
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![]));
    }

    #[test]
    fn test_starts_session() {
        let user = User { username: "indy".into(), email: "i@x".into(), admin: None };
        assert!(Action::SetUser { user: Some(user) }.starts_session());
        assert!(!Action::SetUser { user: None }.starts_session());
        assert!(!Action::SessionEnded.starts_session());
        assert!(!Action::SetCategories { categories: vec![] }.starts_session());
    }

    #[test]
    fn test_removal_from_unloaded_or_missing_is_noop() {
        let state = ClientState::default();
        let after = apply(state.clone(), Action::NoteDeleted { note: note(1) });
        assert_eq!(after, state);

        let state = loaded(vec![note(1)], vec![], vec![note(2)]);
        let after = apply(state.clone(), Action::NoteDeleted { note: note(42) });
        assert_eq!(after, state);
    }

    #[test]
    fn test_binned_note_leaves_notes_and_triaged() {
        let state = loaded(vec![note(1)], vec![triaged_note(1, 3)], vec![note(9)]);
        let state = apply(state, Action::NoteBinned { note: note(1) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![]));
        assert_eq!(ids(&state, Bucket::Triaged), Some(vec![]));
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![1, 9]));
    }

    #[test]
    fn test_append_creates_notes_listing_and_skips_duplicates() {
        let state = apply(ClientState::default(), Action::ListingNoteAppended { note: note(1) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![1]));

        let state = apply(state, Action::ListingNoteAppended { note: note(2) });
        let state = apply(state, Action::ListingNoteAppended { note: note(1) });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![2, 1]));
    }

    #[test]
    fn test_content_update_preserves_identity_and_position() {
        let state = loaded(vec![], vec![triaged_note(1, 2), triaged_note(5, 2)], vec![]);
        let edited = Note {
            id: 5,
            title: "new title".into(),
            content: "new body".into(),
            category_id: None,
        };
        let state = apply(state, Action::NoteContentUpdated { note: edited });
        let triaged = state.listings.get(Bucket::Triaged).unwrap();
        assert_eq!(triaged[1].id, 5);
        assert_eq!(triaged[1].title, "new title");
        assert_eq!(triaged[1].content, "new body");
        assert_eq!(triaged[1].category_id, Some(2));
        assert_eq!(triaged[0], triaged_note(1, 2));
    }

    #[test]
    fn test_listing_set_is_authoritative() {
        let state = loaded(vec![note(1), note(2)], vec![], vec![]);
        let state = apply(
            state,
            Action::ListingSet { resource: Bucket::Bin, listing: vec![note(2), note(3), note(3)] },
        );
        assert_eq!(ids(&state, Bucket::Bin), Some(vec![2, 3]));
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![1]));

        let state = apply(state, Action::ListingSet { resource: Bucket::Triaged, listing: vec![] });
        assert_eq!(ids(&state, Bucket::Triaged), Some(vec![]));
    }

    #[test]
    fn test_last_listing_set_wins() {
        let state = apply(
            ClientState::default(),
            Action::ListingSet { resource: Bucket::Notes, listing: vec![note(1)] },
        );
        let state = apply(state, Action::ListingSet { resource: Bucket::Notes, listing: vec![note(2)] });
        assert_eq!(ids(&state, Bucket::Notes), Some(vec![2]));
    }

    #[test]
    fn test_route_changed_sets_active_view() {
        let state = apply(ClientState::default(), Action::RouteChanged { url: "/triaged".into() });
        assert_eq!(state.active_view, Some(Bucket::Triaged));
        let state = apply(state, Action::RouteChanged { url: "/triaged/3".into() });
        assert_eq!(state.active_view, None);
    }

    #[test]
    fn test_session_ended_resets_user_data() {
        let state = loaded(vec![note(1)], vec![], vec![]);
        let state = ClientState {
            user: Some(User { username: "u".into(), email: "e".into(), admin: None }),
            categories: vec![category(1, "Work")],
            triage_selection: Some(category(1, "Work")),
            active_view: Some(Bucket::Notes),
            ..state
        };
        let state = apply(state, Action::SessionEnded);
        assert_eq!(state.user, None);
        assert!(state.categories.is_empty());
        assert_eq!(state.triage_selection, None);
        assert!(!state.listings.is_loaded(Bucket::Notes));
        assert_eq!(state.active_view, Some(Bucket::Notes));
    }

    #[test]
    fn test_triaged_in_groups_by_category() {
        let state = loaded(vec![], vec![triaged_note(1, 1), triaged_note(2, 2), triaged_note(3, 1)], vec![]);
        let work: Vec<Key> = state.listings.triaged_in(1).iter().map(|n| n.id).collect();
        assert_eq!(work, vec![1, 3]);
        assert!(ClientState::default().listings.triaged_in(1).is_empty());
    }

    fn assert_exclusive(state: &ClientState) {
        let mut seen = std::collections::HashSet::new();
        for bucket in Bucket::ALL {
            for n in state.listings.get(bucket).unwrap_or_default() {
                assert!(seen.insert(n.id), "note {} appears twice", n.id);
            }
        }
    }

    #[test]
    fn test_exclusivity_over_action_sequences() {
        // Small LCG so the sequence is reproducible
        let mut seed: u64 = 0x5eed;
        let mut next = |bound: u64| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) % bound
        };

        for start_loaded in [true, false] {
            let mut state = if start_loaded {
                loaded(vec![], vec![], vec![])
            } else {
                ClientState::default()
            };
            for _ in 0..2000 {
                let id = next(6) as Key;
                let n = if next(2) == 0 { note(id) } else { triaged_note(id, next(3) as Key) };
                let action = match next(10) {
                    0 => Action::ListingNoteAppended { note: n },
                    1 => Action::NoteTriaged { note: n },
                    2 => Action::NoteUntriaged { note: n },
                    3 => Action::NoteBinned { note: n },
                    4 => Action::NoteUnbinned { note: n },
                    5 => Action::NoteDeleted { note: n },
                    6 => Action::BinEmptied,
                    7 => Action::NoteContentUpdated { note: n },
                    8 => Action::ListingSet {
                        resource: Bucket::ALL[next(3) as usize],
                        listing: vec![n, note(next(6) as Key)],
                    },
                    _ => Action::Unrecognized,
                };
                state = apply(state, action);
                assert_exclusive(&state);
            }
        }
    }

    // ========================
    // Wire shape
    // ========================

    #[test]
    fn test_action_wire_names() {
        let json = serde_json::to_value(Action::NoteTriaged { note: triaged_note(1, 5) }).unwrap();
        assert_eq!(json["type"], "note-triaged");
        assert_eq!(json["note"]["category_id"], 5);

        let json = serde_json::to_value(Action::CategoryDeleted { deleted_category: category(1, "Work") }).unwrap();
        assert_eq!(json["type"], "category-deleted");
        assert_eq!(json["deletedCategory"]["title"], "Work");

        let json = serde_json::to_value(Action::ListingSet { resource: Bucket::Triaged, listing: vec![] }).unwrap();
        assert_eq!(json["resource"], "triaged");

        assert_eq!(serde_json::to_value(Action::BinEmptied).unwrap()["type"], "bin-emptied");
    }

    #[test]
    fn test_action_aliases() {
        let action: Action = serde_json::from_str(r#"{"type":"categories-set","categories":[{"id":1,"title":"Work"}]}"#).unwrap();
        assert_eq!(action, Action::SetCategories { categories: vec![category(1, "Work")] });

        let action: Action = serde_json::from_str(r#"{"type":"user-set"}"#).unwrap();
        assert_eq!(action, Action::SetUser { user: None });

        let action: Action = serde_json::from_str(r#"{"type":"triage-category-set","triageCategory":{"id":2,"title":"Home"}}"#).unwrap();
        assert_eq!(action, Action::TriageCategorySet { triage_category: Some(category(2, "Home")) });
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let actions = vec![
            Action::SetUser { user: None },
            Action::SetCategories { categories: vec![] },
            Action::CategoryDeleted { deleted_category: category(1, "a") },
            Action::RouteChanged { url: "/".into() },
            Action::ListingSet { resource: Bucket::Notes, listing: vec![] },
            Action::ListingNoteAppended { note: note(1) },
            Action::NoteTriaged { note: note(1) },
            Action::NoteUntriaged { note: note(1) },
            Action::NoteBinned { note: note(1) },
            Action::NoteUnbinned { note: note(1) },
            Action::NoteDeleted { note: note(1) },
            Action::BinEmptied,
            Action::NoteContentUpdated { note: note(1) },
            Action::TriageCategorySet { triage_category: None },
            Action::SessionEnded,
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.kind());
            let back: Action = serde_json::from_value(json).unwrap();
            assert_eq!(back, action);
        }
    }
}
