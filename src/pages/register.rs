//! Account registration pages.
//!
//! Registration returns the same token response as sign-in, so a successful
//! submit goes through `finish_sign_in` and lands the new user directly.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let group = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<crate::state::session::SessionStore>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<crate::config::ClientConfig>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match crate::net::api::validate_register_input(
            &email.get(),
            &password.get(),
            &full_name.get(),
            &group.get(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api_base = config.api_base.clone();
            let guard = crate::guard::NavigationGuard::new(config.guard.clone());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&api_base, &body).await;
                if let Err(msg) = super::login::finish_sign_in(session, &guard, &navigate, result) {
                    info.set(msg);
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Event Portal"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField value=full_name kind="text" placeholder="Full name"/>
                    <TextField value=email kind="email" placeholder="you@example.com"/>
                    <TextField value=password kind="password" placeholder="Password"/>
                    <TextField value=group kind="text" placeholder="Group (optional)"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <A href="/login">"Already registered? Sign in"</A>
            </div>
        </div>
    }
}

#[component]
pub fn AdminRegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let secret_key = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<crate::state::session::SessionStore>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<crate::config::ClientConfig>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match crate::net::api::validate_admin_register_input(
            &email.get(),
            &password.get(),
            &full_name.get(),
            &secret_key.get(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating administrator...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api_base = config.api_base.clone();
            let guard = crate::guard::NavigationGuard::new(config.guard.clone());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register_admin(&api_base, &body).await;
                if let Err(msg) = super::login::finish_sign_in(session, &guard, &navigate, result) {
                    info.set(msg);
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Event Portal"</h1>
                <p class="login-card__subtitle">"Register an administrator"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField value=full_name kind="text" placeholder="Full name"/>
                    <TextField value=email kind="email" placeholder="you@example.com"/>
                    <TextField value=password kind="password" placeholder="Password"/>
                    <TextField value=secret_key kind="password" placeholder="Admin secret key"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <A href="/admin/login">"Back to administrator sign in"</A>
            </div>
        </div>
    }
}

#[component]
fn TextField(value: RwSignal<String>, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="login-input"
            type=kind
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
