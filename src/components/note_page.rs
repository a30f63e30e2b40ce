//! Note Page
//!
//! Single note view with inline editing, shared by all three buckets.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::components::NoteText;
use crate::context::use_app_context;
use crate::models::{Key, Note, ProtoNote};
use crate::note_text::pigment;
use crate::routes;
use crate::store::{Bucket, ClientStateStoreFields};

#[component]
pub fn NotePage(bucket: Bucket) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let params = use_params_map();
    ctx.ensure_listing(bucket);

    let note_id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<Key>().ok()));
    let note = Memo::new(move |_| {
        let id = note_id()?;
        store.listings().with(|l| {
            l.get(bucket)
                .and_then(|notes| notes.iter().find(|n| n.id == id).cloned())
        })
    });

    move || match note.get() {
        Some(note) => view! { <NoteArticle note=note bucket=bucket/> }.into_any(),
        None => view! { <article/> }.into_any(),
    }
}

#[component]
fn NoteArticle(note: Note, bucket: Bucket) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let pigment = pigment(note.id);

    let (editing, set_editing) = signal(false);
    let (title, set_title) = signal(note.title.clone());
    let (content, set_content) = signal(note.content.clone());
    let note_id = note.id;
    let note = StoredValue::new(note);

    let on_save = move |_| {
        let proto = ProtoNote {
            title: title.get(),
            content: content.get(),
        };
        let api = ctx.api();
        spawn_local(async move {
            if ctx.settle(api.edit_note(note_id, &proto).await) {
                set_editing.set(false);
            }
        });
    };

    let on_bin = move |_| {
        let api = ctx.api();
        let note = note.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            if ctx.settle(api.bin_note(bucket, note).await) {
                navigate(routes::NOTES, NavigateOptions::default());
            }
        });
    };

    view! {
        <article>
            <Show
                when=move || editing.get()
                fallback=move || {
                    let note = note.get_value();
                    view! {
                        <h1><NoteText text=note.title link_class=pigment.class.clone()/></h1>
                        <p><NoteText text=note.content link_class=pigment.class.clone()/></p>
                    }
                }
            >
                <div class="edit">
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <br/><br/>
                    <textarea
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    />
                    <br/>
                </div>
            </Show>
            <div class="button-container">
                <Show when=move || editing.get()>
                    <button class="button save-button" on:click=on_save>"Save"</button>
                </Show>
                <button class="button" on:click=move |_| set_editing.update(|e| *e = !*e)>
                    {move || if editing.get() { "Cancel Editing" } else { "Edit" }}
                </button>
                {(bucket != Bucket::Bin).then(|| view! {
                    <button class="button bin-button" on:click=on_bin>"Bin"</button>
                })}
            </div>
        </article>
    }
}
