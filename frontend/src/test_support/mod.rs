#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserProfile;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn owner() -> UserProfile {
        UserProfile {
            id: 1,
            email: "owner@garage1.np".into(),
            username: "owner".into(),
            first_name: "Ram".into(),
            last_name: "Thapa".into(),
            garage: Some("garage1".into()),
            role: Some("Admin".into()),
        }
    }

    /// Runs `f` inside a fresh reactive runtime, disposed afterwards.
    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn provide_auth(state: AuthState) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
