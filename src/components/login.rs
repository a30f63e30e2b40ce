//! Login Components
//!
//! Login and registration forms, and the logout form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_app_context;
use crate::models::Registration;
use crate::routes;
use crate::store::ClientStateStoreFields;

/// Registration form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub magic_word: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterForm {
    /// All fields present and both passwords equal
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty()
            && !self.email.is_empty()
            && !self.magic_word.is_empty()
            && !self.password.is_empty()
            && self.password == self.password2
    }

    pub fn registration(&self) -> Registration<'_> {
        Registration {
            username: &self.username,
            email: &self.email,
            password: &self.password,
            magic_word: &self.magic_word,
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let navigate = use_navigate();

    // Once the state has a user there is nothing to do here
    Effect::new(move |_| {
        if store.user().with(Option::is_some) {
            navigate(routes::NOTES, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (register, set_register) = signal(RegisterForm::default());

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get(), password.get());
        let api = ctx.api();
        ctx.sign_in(async move { api.login(&email, &password).await });
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = register.get();
        if !form.is_complete() {
            return;
        }
        let api = ctx.api();
        ctx.sign_in(async move { api.register(&form.registration()).await });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                name=id
                prop:value=move || register.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_register.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <section>
            <h1>"Login"</h1>
            <form on:submit=on_login>
                <label for="login-email">"Email:"</label>
                <input
                    id="login-email"
                    type="text"
                    name="login-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <label for="login-password">"Password:"</label>
                <input
                    id="login-password"
                    type="password"
                    name="login-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input type="submit" value="Login"/>
            </form>
            <h1>"Register New User"</h1>
            <form on:submit=on_register>
                {field("register-magic-word", "Magic word:", "text", |f| f.magic_word.clone(), |f, v| f.magic_word = v)}
                {field("register-username", "Username:", "text", |f| f.username.clone(), |f, v| f.username = v)}
                {field("register-email", "Email:", "text", |f| f.email.clone(), |f, v| f.email = v)}
                {field("register-password", "Password:", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {field("register-password-2", "Confirm Password:", "password", |f| f.password2.clone(), |f, v| f.password2 = v)}
                <input
                    type="submit"
                    value="Register"
                    disabled=move || !register.with(RegisterForm::is_complete)
                />
            </form>
        </section>
    }
}

/// Ends the session on the server, then client side
#[component]
pub fn LogoutForm() -> impl IntoView {
    let ctx = use_app_context();

    let on_logout = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        ctx.run(async move { api.logout().await });
    };

    view! {
        <section>
            <form on:submit=on_logout>
                <input type="submit" value="Logout"/>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            magic_word: "please".into(),
            username: "indy".into(),
            email: "indy@example.com".into(),
            password: "hunter2".into(),
            password2: "hunter2".into(),
        }
    }

    #[test]
    fn test_register_form_complete() {
        assert!(filled().is_complete());
        assert!(!RegisterForm::default().is_complete());
    }

    #[test]
    fn test_register_form_requires_matching_passwords() {
        let form = RegisterForm { password2: "hunter3".into(), ..filled() };
        assert!(!form.is_complete());
    }

    #[test]
    fn test_register_form_requires_magic_word() {
        let form = RegisterForm { magic_word: String::new(), ..filled() };
        assert!(!form.is_complete());
    }

    #[test]
    fn test_registration_payload() {
        let form = filled();
        let json = serde_json::to_value(form.registration()).unwrap();
        assert_eq!(json["magic_word"], "please");
        assert_eq!(json["username"], "indy");
    }
}
