use yew::prelude::*;

use super::{INPUT_CLASSES, SECONDARY_BUTTON_CLASSES, event_value};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub images: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
}

/// Gallery of image URLs in display order.
#[function_component]
pub fn ImageGalleryInput(props: &Props) -> Html {
    let pending = use_state(String::new);

    let on_input = {
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| pending.set(event_value(&e)))
    };

    let on_add = {
        let pending = pending.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(pending.trim().to_string());
            pending.set(String::new());
        })
    };

    html! {
        <div class="space-y-3">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                { for props.images.iter().enumerate().map(|(idx, url)| {
                    let on_remove = props.on_remove.reform(move |_: MouseEvent| idx);
                    html! {
                        <div class="relative">
                            <img src={url.clone()} class="h-24 w-full object-cover rounded-md" />
                            <button
                                type="button"
                                class="absolute top-1 right-1 px-1 rounded bg-white/80 text-red-600"
                                onclick={on_remove}
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }) }
            </div>
            <div class="flex gap-2">
                <input
                    type="url"
                    class={INPUT_CLASSES}
                    placeholder="https://..."
                    value={(*pending).clone()}
                    oninput={on_input}
                />
                <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_add}>
                    {"Add image"}
                </button>
            </div>
        </div>
    }
}
