//! Settings Page

use leptos::prelude::*;

use crate::components::LogoutForm;
use crate::context::use_app_context;
use crate::store::ClientStateStoreFields;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div>
            {move || store.user().get().map(|user| view! {
                <p>{format!("Logged in as {} <{}>", user.display_name(), user.email)}</p>
            })}
            <LogoutForm/>
            <hr/>
            <SampleCards/>
        </div>
    }
}

/// One sample card per pigment, for checking the theme
#[component]
fn SampleCards() -> impl IntoView {
    (1..=12)
        .map(|num| {
            let class = format!("pigment-clock-{:02}", num);
            view! {
                <div class=format!("card {} darken-border", class)>
                    <div class="card-body">
                        <div class="card-action">
                            <button class=format!("{}-hi button button-height-bodge", class)>"Sample Button"</button>
                        </div>
                        <h3>"Sample Card"</h3>
                        <p>"Sample Text"</p>
                    </div>
                </div>
            }
        })
        .collect_view()
}
