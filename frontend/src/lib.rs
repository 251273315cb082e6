use leptos::*;

pub mod api;
pub mod components;
pub mod config;
pub mod session;
pub mod state;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiError, UserProfile};
pub use session::{Session, SessionManager};
pub use state::auth::{use_auth, AuthProvider, AuthState};

use components::guard::RequireAuth;

/// Installs the panic hook and console logger, then warms the base URL cache.
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
    log::info!("Starting GadiSewa frontend (wasm)");

    leptos::spawn_local(async move {
        config::init().await;
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init();
    mount_to_body(|| {
        view! {
            <AuthProvider>
                <SessionShell/>
            </AuthProvider>
        }
    });
}

/// Signed-in header: who is logged in, plus a logout button.
#[component]
pub fn SessionShell() -> impl IntoView {
    let (auth, _) = use_auth();
    let logout = state::auth::use_logout_action();
    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.display_name())
            .unwrap_or_default()
    };
    view! {
        <RequireAuth>
            <header class="flex justify-between items-center p-4">
                <span>{display_name}</span>
                <button on:click=move |_| logout.dispatch(())>"Logout"</button>
            </header>
        </RequireAuth>
    }
}
