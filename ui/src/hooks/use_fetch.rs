use payloads::ClientError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<Rc<ClientError>>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state.
    ///
    /// - No data + loading: spinner with "Loading {context}..."
    /// - No data + error: `render_error` decides, since a missing collection
    ///   gets its own instructions
    /// - Has data: `render_fn`
    pub fn render<F, E>(&self, context: &str, render_fn: F, render_error: E) -> Html
    where
        F: Fn(&T) -> Html,
        E: Fn(&Rc<ClientError>) -> Html,
    {
        match (self.data.as_ref(), &self.error) {
            (Some(data), _) => render_fn(data),
            (None, Some(error)) => render_error(error),
            (None, None) => html! {
                <div class="flex flex-col items-center py-12 space-y-3">
                    <div class="h-8 w-8 rounded-full border-2 border-neutral-300 \
                                border-t-neutral-900 dark:border-neutral-600 \
                                dark:border-t-white animate-spin"></div>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {}...", context)}
                    </p>
                </div>
            },
        }
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and when `deps` change, and provides
/// refetch capability.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_villa(villa_id: VillaId) -> FetchHookReturn<responses::Villa> {
///     use_fetch(villa_id, move || async move {
///         get_api_client().get_villa(&villa_id).await
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<Rc<ClientError>>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => data.set(FetchState::Fetched(result)),
                    Err(e) => {
                        tracing::warn!("fetch failed: {e}");
                        error.set(Some(Rc::new(e)));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
