use crate::{components::layout::LoadingSpinner, state::auth::use_auth};
use leptos::*;

pub const LOGIN_ROUTE: &str = "/login";

/// Renders `children` for a signed-in user once the session has settled;
/// anyone else is sent to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if !should_redirect(is_authenticated.get(), is_loading.get()) {
            return;
        }
        if let Some(win) = web_sys::window() {
            if win.location().set_href(LOGIN_ROUTE).is_err() {
                log::error!("Failed to redirect to {}", LOGIN_ROUTE);
            }
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn should_redirect(is_authenticated: bool, is_loading: bool) -> bool {
    !is_authenticated && !is_loading
}
