//! Login Screen
//!
//! The only screen reachable without a token. Empty fields are
//! rejected before any request goes out; a successful login writes
//! the token into the session store and the shell switches over on
//! its own.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::store::{session_set_token, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set("Email and password are required".to_string());
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(resp) => {
                    web_sys::console::log_1(&"[Login] Authenticated".into());
                    session_set_token(&session, resp.token);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Login] Failed: {}", e).into());
                    set_error.set("Invalid email or password".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <div class="brand-badge large">"N"</div>
                <h1>"Welcome Back"</h1>
                <p class="muted">"Login to Nymph Classes Admin"</p>

                <form on:submit=submit>
                    <label class="form-field">
                        <span class="field-label">"Email"</span>
                        <input
                            type="email"
                            placeholder="admin@school.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        <span class="field-label">"Password"</span>
                        <div class="password-row">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn btn-ghost small"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error">{move || error.get()}</p>
                    </Show>

                    <button type="submit" class="btn btn-primary full" disabled=loading>
                        {move || if loading.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
