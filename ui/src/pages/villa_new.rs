use payloads::forms::VillaForm;
use yew::prelude::*;

use super::PageHeader;
use crate::{
    Route,
    components::VillaFormView,
    contexts::toast::use_toast,
    get_api_client,
    hooks::{use_push_route, use_title},
};

#[function_component]
pub fn NewVillaPage() -> Html {
    use_title("New villa");
    let push_route = use_push_route();
    let toast = use_toast();
    let is_busy = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);

    let on_submit = {
        let is_busy = is_busy.clone();
        let error = error.clone();
        let push_route = push_route.clone();
        Callback::from(move |form: VillaForm| {
            let villa = form.to_villa();
            let is_busy = is_busy.clone();
            let error = error.clone();
            let push_route = push_route.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_busy.set(true);
                error.set(None);

                match get_api_client().create_villa(&villa).await {
                    Ok(villa_id) => {
                        tracing::info!(%villa_id, "villa created");
                        toast.success(
                            "Villa Created",
                            format!(
                                "\"{}\" has been added successfully",
                                villa.name
                            ),
                        );
                        push_route.emit(Route::Villas);
                    }
                    Err(e) => {
                        let message = e.to_string();
                        toast.error("Creation Failed", message.clone());
                        error.set(Some(message.into()));
                    }
                }

                is_busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl">
            <PageHeader title="New villa" />
            <VillaFormView
                submit_label="Create villa"
                is_busy={*is_busy}
                error={(*error).clone()}
                {on_submit}
                on_cancel={push_route.reform(|_| Route::Villas)}
            />
        </div>
    }
}
