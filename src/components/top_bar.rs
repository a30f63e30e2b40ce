//! Top Bar Component
//!
//! Login status link plus the three bucket links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::routes;
use crate::store::{Bucket, ClientStateStoreFields};

const MENU: &[(Bucket, &str, &str)] = &[
    (Bucket::Notes, "Notes", "pigment-notes"),
    (Bucket::Triaged, "Triaged", "pigment-triaged"),
    (Bucket::Bin, "Bin", "pigment-bin"),
];

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let status = move || {
        store
            .user()
            .with(|u| u.as_ref().map(|u| u.display_name()))
            .unwrap_or_else(|| "Login".to_string())
    };
    let status_href = move || {
        if store.user().with(Option::is_some) {
            routes::SETTINGS.to_string()
        } else {
            routes::LOGIN.to_string()
        }
    };

    view! {
        <div id="top-bar-menu" class="hr">
            <A href=status_href attr:id="login-menuitem" attr:class="pigment-inherit">{status}</A>
            {MENU.iter().map(|(bucket, label, pigment)| {
                let bucket = *bucket;
                let class = move || {
                    let active = store.active_view().get() == Some(bucket);
                    format!(
                        "top-bar-menuitem {}{}",
                        pigment,
                        if active { " top-bar-menuitem-active" } else { "" }
                    )
                };
                view! {
                    <A href=routes::listing_path(bucket) attr:class=class>{*label}</A>
                }
            }).collect_view()}
        </div>
    }
}
