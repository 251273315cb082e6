use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_spinner_announces_status() {
        let html = render_to_string(|| view! { <LoadingSpinner /> });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading..."));
    }
}
