use payloads::{
    ProximityItem,
    forms::entries::{ProximityField, add_entry, remove_entry, update_entry},
};
use yew::prelude::*;

use super::{INPUT_CLASSES, SECONDARY_BUTTON_CLASSES, event_value};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Vec<ProximityItem>,
    pub on_change: Callback<Vec<ProximityItem>>,
}

#[function_component]
pub fn ProximityEditor(props: &Props) -> Html {
    let on_add = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(add_entry(&value)))
    };

    let field = |idx: usize, field: ProximityField| {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            on_change.emit(update_entry(&value, idx, field, event_value(&e)))
        })
    };

    html! {
        <div class="space-y-3">
            { for props.value.iter().enumerate().map(|(idx, item)| {
                let on_remove = {
                    let value = props.value.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_change.emit(remove_entry(&value, idx))
                    })
                };
                html! {
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class={INPUT_CLASSES}
                            placeholder="Place (e.g. Ubud Palace)"
                            value={item.name.clone()}
                            oninput={field(idx, ProximityField::Name)}
                        />
                        <input
                            type="text"
                            class={INPUT_CLASSES}
                            placeholder="Distance (e.g. 15 min drive)"
                            value={item.distance.clone()}
                            oninput={field(idx, ProximityField::Distance)}
                        />
                        <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_remove}>
                            {"Remove"}
                        </button>
                    </div>
                }
            }) }
            <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_add}>
                {"+ Add nearby place"}
            </button>
        </div>
    }
}
