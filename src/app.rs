//! Memo Frontend App
//!
//! Router, route tracking and the initial state built before mounting.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{path, NavigateOptions};
use reactive_stores::Store;

use crate::commands::Api;
use crate::components::{BinPage, LoginPage, LogoutForm, NotePage, NotesPage, SettingsPage, TopBar, TriagedPage};
use crate::context::{use_app_context, AppContext};
use crate::routes;
use crate::store::{apply, Action, Bucket, ClientState, ClientStateStoreFields};

/// Session user and categories, fetched before the first render so that
/// the login redirect never fires for a valid session.
pub async fn build_initial_state(api: &Api) -> ClientState {
    let mut state = ClientState::default();

    match api.current_user().await {
        Ok(action @ Action::SetUser { user: Some(_) }) => {
            state = apply(state, action);
            log::info!("[APP] user is logged in");
        }
        Ok(_) => {
            log::info!("[APP] no user is logged in");
            return state;
        }
        Err(e) => {
            log::info!("[APP] no user is logged in: {}", e);
            return state;
        }
    }

    match api.list_categories().await {
        Ok(action) => state = apply(state, action),
        Err(e) => log::warn!("[APP] failed to load categories: {}", e),
    }
    state
}

#[component]
pub fn App(api: Api, initial: ClientState) -> impl IntoView {
    let store = Store::new(initial);
    provide_context(AppContext::new(store, api));

    view! {
        <Router>
            <div id="memo-app">
                <TopBar/>
                <RouteTracker/>
                <div id="app-content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=NotesPage/>
                        <Route path=path!("/notes/:id") view=|| view! { <NotePage bucket=Bucket::Notes/> }/>
                        <Route path=path!("/triaged") view=TriagedPage/>
                        <Route path=path!("/triaged/:id") view=|| view! { <NotePage bucket=Bucket::Triaged/> }/>
                        <Route path=path!("/bin") view=BinPage/>
                        <Route path=path!("/bin/:id") view=|| view! { <NotePage bucket=Bucket::Bin/> }/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/logout") view=LogoutForm/>
                        <Route path=path!("/settings") view=SettingsPage/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

/// Folds navigation into the store and keeps logged out users on `/login`
#[component]
fn RouteTracker() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let url = location.pathname.get();
        ctx.dispatch(Action::RouteChanged { url });
    });

    // Separate effect: it reads the user, so it must not dispatch
    Effect::new(move |_| {
        let path = location.pathname.get();
        let logged_in = store.user().with(Option::is_some);
        if !logged_in && !routes::is_public(&path) {
            log::info!("[APP] redirecting to {} because user is not logged in", routes::LOGIN);
            navigate(routes::LOGIN, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}
