//! Notes Page
//!
//! Untriaged notes: create form, triage category selector and cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NoteCard;
use crate::context::use_app_context;
use crate::models::{Category, Key, Note};
use crate::note_text::{note_from_text, pigment};
use crate::store::{Action, Bucket, ClientStateStoreFields};

#[component]
pub fn NotesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    ctx.ensure_listing(Bucket::Notes);

    // Default triage category is the first one
    Effect::new(move |_| {
        let first = store.categories().with(|cs| cs.first().cloned());
        let selected = store.triage_selection().with(Option::is_some);
        if let (Some(first), false) = (first, selected) {
            ctx.dispatch(Action::TriageCategorySet { triage_category: Some(first) });
        }
    });

    let notes = move || {
        store
            .listings()
            .with(|l| l.get(Bucket::Notes).map(<[Note]>::to_vec).unwrap_or_default())
    };

    view! {
        <div>
            <div class="section-controls darken-border">
                <CreateNoteForm/>
            </div>
            <div class="section-controls darken-border section-controls-additional-bodge">
                <TriageCategorySelect/>
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
fn TriageCategorySelect() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let found = store.categories().with(|cs| category_for_option(cs, &value));
        match found {
            Some(category) => ctx.dispatch(Action::TriageCategorySet { triage_category: Some(category) }),
            None => log::warn!("[APP] selected category `{}` is not in the category list", value),
        }
    };

    move || {
        let categories = store.categories().get();
        (!categories.is_empty()).then(|| {
            let selected = store.triage_selection().get().map(|c| c.id);
            view! {
                <div class="pad-top-1rem">
                    <label for="categories">"Triage Categories:"</label>
                    <select on:change=on_change name="categories" id="categories">
                        {categories.into_iter().map(|c| view! {
                            <option value=c.id.to_string() selected={Some(c.id) == selected}>{c.title.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
            }
        })
    }
}

/// Category behind a `<select>` option value, which is the category id
fn category_for_option(categories: &[Category], value: &str) -> Option<Category> {
    let id = value.parse::<Key>().ok()?;
    categories.iter().find(|c| c.id == id).cloned()
}

#[component]
fn NoteListItem(note: Note) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let pigment = pigment(note.id);
    let note = StoredValue::new(note);

    let on_triage = move |_| {
        let Some(category) = store.triage_selection().get_untracked() else {
            log::error!("[APP] trying to triage a note without first selecting a category");
            return;
        };
        let api = ctx.api();
        let id = note.with_value(|n| n.id);
        ctx.run(async move { api.triage_note(id, &category).await });
    };

    let on_bin = move |_| {
        let api = ctx.api();
        let note = note.get_value();
        ctx.run(async move { api.bin_note(Bucket::Notes, note).await });
    };

    let triage_button = {
        let class = format!("{} button button-height-bodge", pigment.class_hi);
        move || {
            store.triage_selection().get().map(|category: Category| view! {
                <button class=class.clone() on:click=on_triage>
                    {format!("Triage to {}", category.title)}
                </button>
            })
        }
    };

    view! {
        <NoteCard note=note.get_value() bucket=Bucket::Notes>
            {triage_button}
            <button class=format!("{} button button-delete", pigment.class_hi) on:click=on_bin>
                "Bin"
            </button>
        </NoteCard>
    }
}

#[component]
fn CreateNoteForm() -> impl IntoView {
    let ctx = use_app_context();
    let (user_text, set_user_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(proto) = note_from_text(&user_text.get()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            if ctx.settle(api.create_note(&proto).await) {
                set_user_text.set(String::new());
            }
        });
    };

    view! {
        <form class="add-note-form" on:submit=on_submit>
            <input
                class="button save-button"
                type="submit"
                value="Save"
                disabled=move || user_text.with(|t| t.trim().is_empty())
            />
            <br/>
            <textarea
                id="content"
                name="content"
                prop:value=move || user_text.get()
                on:input=move |ev| set_user_text.set(event_target_value(&ev))
            />
        </form>
    }
}
