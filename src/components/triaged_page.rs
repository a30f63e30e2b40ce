//! Triaged Page
//!
//! Triaged notes grouped by category, category creation and deletion of
//! categories that no longer hold any notes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, NoteCard};
use crate::context::use_app_context;
use crate::models::{Category, Note};
use crate::note_text::pigment;
use crate::store::{Bucket, ClientStateStoreFields};

#[component]
pub fn TriagedPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    ctx.ensure_listing(Bucket::Triaged);

    // Grouping is derived from the flat listing on every change
    let sections = Memo::new(move |_| {
        let categories = store.categories().get();
        store.listings().with(|l| {
            categories
                .into_iter()
                .map(|c| {
                    let notes = l.triaged_in(c.id);
                    (c, notes)
                })
                .collect::<Vec<(Category, Vec<Note>)>>()
        })
    });

    let loaded = move || store.listings().with(|l| l.is_loaded(Bucket::Triaged));

    view! {
        <Show when=loaded fallback=|| view! { <div></div> }>
            <div>
                <div class="section-controls">
                    <NewCategoryForm/>
                </div>
                <div class="hr"/>
                <div>
                    <For
                        each=move || sections.get().into_iter().filter(|(_, notes)| !notes.is_empty())
                        key=|section| section.clone()
                        children=move |(category, notes)| view! {
                            <TriagedCategory title=category.title notes=notes/>
                        }
                    />
                </div>
                <div class="hr"/>
                <div class="pad-left-1rem pad-top-1rem">
                    <For
                        each=move || sections.get().into_iter().filter(|(_, notes)| notes.is_empty()).map(|(c, _)| c)
                        key=|category| category.id
                        children=move |category| view! { <DeletableCategory category=category/> }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn TriagedCategory(title: String, notes: Vec<Note>) -> impl IntoView {
    let (show, set_show) = signal(true);

    view! {
        <div>
            <h1 class="pad-left-1rem" on:click=move |_| set_show.update(|s| *s = !*s)>
                {move || if show.get() { "− " } else { "+ " }}
                {title}
            </h1>
            <Show when=move || show.get()>
                <div class="card-holder">
                    {notes.clone().into_iter().map(|note| view! { <NoteListItem note=note/> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NoteListItem(note: Note) -> impl IntoView {
    let ctx = use_app_context();
    let pigment = pigment(note.id);
    let note = StoredValue::new(note);

    let on_untriage = move |_| {
        let api = ctx.api();
        let id = note.with_value(|n| n.id);
        ctx.run(async move { api.untriage_note(id).await });
    };

    let on_bin = move |_| {
        let api = ctx.api();
        let note = note.get_value();
        ctx.run(async move { api.bin_note(Bucket::Triaged, note).await });
    };

    view! {
        <NoteCard note=note.get_value() bucket=Bucket::Triaged>
            <button class=format!("{} button button-height-bodge", pigment.class_hi) on:click=on_untriage>
                "Untriage"
            </button>
            <button class=format!("{} button button-delete", pigment.class_hi) on:click=on_bin>
                "Bin"
            </button>
        </NoteCard>
    }
}

/// Only offered for categories without triaged notes
#[component]
fn DeletableCategory(category: Category) -> impl IntoView {
    let ctx = use_app_context();
    let title = category.title.clone();
    let category = StoredValue::new(category);

    let on_delete = move |_: ()| {
        let api = ctx.api();
        let category = category.get_value();
        ctx.run(async move { api.delete_category(category).await });
    };

    view! {
        <div>
            <DeleteConfirmButton
                button_class="bg2 button"
                label="Delete"
                prompt=format!("Delete {}?", title)
                on_confirm=on_delete
            />
            <span class="pad-left-1rem">{title.clone()}</span>
        </div>
    }
}

#[component]
fn NewCategoryForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (text, set_text) = signal(String::new());

    let disabled = move || {
        let value = text.get();
        value.trim().is_empty()
            || store.categories().with(|cs| cs.iter().any(|c| c.title == value))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if disabled() {
            return;
        }
        let title = text.get();
        let api = ctx.api();
        spawn_local(async move {
            if ctx.settle(api.create_category(&title).await) {
                set_text.set(String::new());
            }
        });
    };

    view! {
        <form class="form-inline" on:submit=on_submit>
            <label class="form-inline-item" for="new-category">"New category:"</label>
            <input
                class="form-inline-item"
                type="text"
                id="new-category"
                name="new-category"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <input
                class="triaged-note-create-button-bodge form-inline-item button save-button"
                type="submit"
                value="Create"
                disabled=disabled
            />
        </form>
    }
}
