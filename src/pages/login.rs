//! Sign-in pages for members and administrators.
//!
//! Both pages share one form. A successful sign-in stores the session and
//! navigates to the landing route for the returned role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::SessionPredicates;
use crate::net::api::ApiError;
use crate::net::types::TokenResponse;
use crate::state::session::SessionStore;

/// User-facing message for a failed auth request.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn auth_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Incorrect email or password.".to_owned(),
        ApiError::Forbidden => "Invalid secret key.".to_owned(),
        ApiError::Status(400) => "That account could not be created.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

/// Store the session from an auth response, returning the new predicates or
/// a message for the form.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn accept_token(
    store: &mut SessionStore,
    result: Result<TokenResponse, ApiError>,
) -> Result<SessionPredicates, String> {
    let token = result.map_err(|e| auth_failure_message(&e))?;
    store.apply_token(token).map_err(|e| format!("Sign-in failed: {e}"))?;
    Ok(store.predicates())
}

/// Apply an auth response to the session signal and navigate to the landing
/// route on success.
#[cfg(feature = "csr")]
pub(crate) fn finish_sign_in<F>(
    session: RwSignal<SessionStore>,
    guard: &crate::guard::NavigationGuard,
    navigate: &F,
    result: Result<TokenResponse, ApiError>,
) -> Result<(), String>
where
    F: Fn(&str, leptos_router::NavigateOptions),
{
    let predicates = session
        .try_update(|s| accept_token(s, result))
        .unwrap_or_else(|| Err("Session is no longer available.".to_owned()))?;
    navigate(guard.landing_for(predicates), leptos_router::NavigateOptions::default());
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <SignInForm title="Sign in" register_href="/register"/> }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <SignInForm title="Administrator sign in" register_href="/admin/register"/> }
}

#[component]
fn SignInForm(title: &'static str, register_href: &'static str) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<SessionStore>>();
    #[cfg(feature = "csr")]
    let config = expect_context::<crate::config::ClientConfig>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match crate::net::api::validate_login_input(&email.get(), &password.get()) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api_base = config.api_base.clone();
            let guard = crate::guard::NavigationGuard::new(config.guard.clone());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&api_base, &body).await;
                if let Err(msg) = finish_sign_in(session, &guard, &navigate, result) {
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
                <p class="login-card__subtitle">{title}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <A href=register_href>"Create an account"</A>
            </div>
        </div>
    }
}
