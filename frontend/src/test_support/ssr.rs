use leptos::*;

use super::helpers::with_runtime;

struct SuppressResources;

impl SuppressResources {
    fn enable() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuppressResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Server-renders a view to HTML for assertions on guard and shell markup.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _suppress = SuppressResources::enable();
    with_runtime(|| view().into_view().render_to_string().to_string())
}
