//! Bin Page
//!
//! Binned notes with undelete and permanent delete.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, NoteCard};
use crate::context::use_app_context;
use crate::models::Note;
use crate::note_text::pigment;
use crate::store::{Bucket, ClientStateStoreFields};

#[component]
pub fn BinPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    ctx.ensure_listing(Bucket::Bin);

    let notes = move || {
        store
            .listings()
            .with(|l| l.get(Bucket::Bin).map(<[Note]>::to_vec).unwrap_or_default())
    };
    let is_empty = move || store.listings().with(|l| l.get(Bucket::Bin).map_or(true, |n| n.is_empty()));

    let on_empty = move |_: ()| {
        let api = ctx.api();
        ctx.run(async move { api.empty_bin().await });
    };

    view! {
        <div>
            <div class="section-controls">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <h2>"Bin is Empty"</h2> }
                >
                    <DeleteConfirmButton
                        button_class="button"
                        label="Really Delete All Notes in Bin"
                        prompt="Delete every note in the bin?"
                        on_confirm=on_empty
                    />
                </Show>
            </div>
            <div class="hr"/>
            <div class="card-holder">
                <For
                    each=notes
                    key=|note| note.clone()
                    children=move |note| view! { <NoteListItem note=note/> }
                />
            </div>
        </div>
    }
}

#[component]
fn NoteListItem(note: Note) -> impl IntoView {
    let ctx = use_app_context();
    let pigment = pigment(note.id);
    let note = StoredValue::new(note);

    let on_undelete = move |_| {
        let api = ctx.api();
        let note = note.get_value();
        ctx.run(async move { api.unbin_note(note).await });
    };

    let on_delete = move |_: ()| {
        let api = ctx.api();
        let note = note.get_value();
        ctx.run(async move { api.delete_note(note).await });
    };

    view! {
        <NoteCard note=note.get_value() bucket=Bucket::Bin>
            <button class=format!("{} button", pigment.class_hi) on:click=on_undelete>
                "Undelete"
            </button>
            <DeleteConfirmButton
                button_class=format!("{} button button-delete", pigment.class_hi)
                label="Really Delete"
                on_confirm=on_delete
            />
        </NoteCard>
    }
}
