//! Note Text Component
//!
//! Renders note text with clickable links and line breaks.

use leptos::prelude::*;

use crate::note_text::{link_href, note_lines, Segment};

#[component]
pub fn NoteText(
    #[prop(into)] text: String,
    /// Pigment class applied to in-note links
    #[prop(into)] link_class: String,
) -> impl IntoView {
    let lines = note_lines(&text);
    let last = lines.len().saturating_sub(1);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, segments)| {
            let segments = segments
                .into_iter()
                .map(|seg| match seg {
                    Segment::Text(t) => t.to_string().into_any(),
                    Segment::Link(l) => view! {
                        <a href=link_href(l) class=format!("in-note-link {}", link_class)>{l.to_string()}</a>
                    }
                    .into_any(),
                })
                .collect_view();
            view! {
                {segments}
                {(i < last).then(|| view! { <br/> })}
            }
        })
        .collect_view()
}
