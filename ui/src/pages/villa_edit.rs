use payloads::{VillaId, forms::VillaForm, requests::UpdateVilla};
use yew::prelude::*;

use super::PageHeader;
use crate::{
    Route,
    components::{CollectionError, VillaFormView},
    contexts::toast::use_toast,
    get_api_client,
    hooks::{use_fetch, use_push_route, use_title},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: VillaId,
}

#[function_component]
pub fn EditVillaPage(props: &Props) -> Html {
    use_title("Edit villa");
    let villa_id = props.id;
    let push_route = use_push_route();
    let toast = use_toast();
    let is_busy = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);

    let villa = use_fetch(villa_id, move || async move {
        get_api_client().get_villa(&villa_id).await
    });

    let on_submit = {
        let is_busy = is_busy.clone();
        let error = error.clone();
        let push_route = push_route.clone();
        Callback::from(move |form: VillaForm| {
            let req = UpdateVilla {
                villa_id,
                villa_details: form.to_villa(),
            };
            let is_busy = is_busy.clone();
            let error = error.clone();
            let push_route = push_route.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_busy.set(true);
                error.set(None);

                match get_api_client().update_villa(&req).await {
                    Ok(villa) => {
                        toast.success(
                            "Villa Updated",
                            format!(
                                "\"{}\" has been saved",
                                villa.villa_details.name
                            ),
                        );
                        push_route.emit(Route::Villas);
                    }
                    Err(e) => {
                        let message = e.to_string();
                        toast.error("Update Failed", message.clone());
                        error.set(Some(message.into()));
                    }
                }

                is_busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl">
            <PageHeader title="Edit villa" />
            {villa.render(
                "villa",
                |villa| html! {
                    <VillaFormView
                        key={villa.villa_id.to_string()}
                        initial={VillaForm::from(villa)}
                        submit_label="Save changes"
                        is_busy={*is_busy}
                        error={(*error).clone()}
                        on_submit={on_submit.clone()}
                        on_cancel={push_route.reform(|_| Route::Villas)}
                    />
                },
                |e| html! { <CollectionError collection="Villas" error={e.clone()} /> },
            )}
        </div>
    }
}
