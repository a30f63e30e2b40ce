//! Note Card Component
//!
//! Card shown in every listing. Action buttons are passed as children.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::NoteText;
use crate::models::Note;
use crate::note_text::pigment;
use crate::routes;
use crate::store::Bucket;

#[component]
pub fn NoteCard(note: Note, bucket: Bucket, children: Children) -> impl IntoView {
    let pigment = pigment(note.id);
    let href = routes::note_path(bucket, note.id);

    view! {
        <div class=format!("card {} darken-border", pigment.class)>
            <div class="card-body">
                <div class="card-action">{children()}</div>
                <h3>
                    <A href=href attr:class=pigment.class.clone()>{note.title.clone()}</A>
                </h3>
                <p>
                    <NoteText text=note.content.clone() link_class=pigment.class.clone()/>
                </p>
            </div>
        </div>
    }
}
