//! Application Context
//!
//! The single controller shared via the Leptos Context API. It owns the
//! store and is the only place where actions are applied.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, Api};
use crate::store::{apply, Action, AppStore, Bucket, ClientStateStoreFields};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api: StoredValue<Api>,
}

impl AppContext {
    pub fn new(store: AppStore, api: Api) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// Replace the state with `apply(state, action)`
    pub fn dispatch(&self, action: Action) {
        log::debug!("[STORE] {}", action.kind());
        self.store.update(|state| {
            let current = std::mem::take(state);
            *state = apply(current, action);
        });
    }

    /// Fold a finished gateway call into the store.
    ///
    /// Returns `true` when an action was dispatched.
    pub fn settle(&self, result: commands::Result<Action>) -> bool {
        match result {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(e @ commands::GatewayError::LoginRejected { .. }) => {
                log::warn!("[NET] {}", e);
                false
            }
            Err(e) if e.is_unauthorized() => {
                log::warn!("[NET] session rejected by server: {}", e);
                self.dispatch(Action::SessionEnded);
                false
            }
            Err(e) => {
                log::error!("[NET] {}", e);
                false
            }
        }
    }

    /// Await a gateway call in the background and settle it
    pub fn run<F>(&self, request: F)
    where
        F: Future<Output = commands::Result<Action>> + 'static,
    {
        let ctx = *self;
        spawn_local(async move {
            ctx.settle(request.await);
        });
    }

    /// Await a login or registration. A new session also needs the user's
    /// categories, which bootstrap only loads for an existing session.
    pub fn sign_in<F>(&self, request: F)
    where
        F: Future<Output = commands::Result<Action>> + 'static,
    {
        let ctx = *self;
        spawn_local(async move {
            let result = request.await;
            let starts_session = result.as_ref().is_ok_and(Action::starts_session);
            if ctx.settle(result) && starts_session {
                let api = ctx.api();
                ctx.settle(api.list_categories().await);
            }
        });
    }

    /// Fetch a bucket if it has never been loaded
    pub fn ensure_listing(&self, bucket: Bucket) {
        if self.store.listings().with_untracked(|l| l.is_loaded(bucket)) {
            return;
        }
        log::info!("[APP] loading {} listing", bucket.as_str());
        let api = self.api();
        self.run(async move { api.fetch_listing(bucket).await });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
