use common::{FetchError, FetchView};
use std::future::Future;
use yew::prelude::*;

/// Fetches once on mount and folds the outcome into a [`FetchView`].
///
/// Each caller spawns its own task, so widgets on the same page load
/// independently and finish in any order. A failed request leaves the view
/// as it was.
#[hook]
pub fn use_fetch_view<V, F, Fut>(fetch_fn: F) -> UseStateHandle<V>
where
    V: FetchView + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<V::Payload, FetchError>> + 'static,
{
    let view = use_state(V::default);

    {
        let view = view.clone();
        use_effect_with((), move |_| {
            log::debug!("Loading view from {}", V::SOURCE);
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_fn().await;
                let mut next = (*view).clone();
                if next.apply(result) {
                    view.set(next);
                }
            });
            || ()
        });
    }

    view
}
