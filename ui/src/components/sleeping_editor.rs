use payloads::{
    SleepingItem,
    forms::entries::{
        BED_OPTIONS, SleepingField, add_entry, remove_entry, update_entry,
    },
};
use yew::prelude::*;

use super::{INPUT_CLASSES, SECONDARY_BUTTON_CLASSES, event_value};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Vec<SleepingItem>,
    pub on_change: Callback<Vec<SleepingItem>>,
}

#[function_component]
pub fn SleepingEditor(props: &Props) -> Html {
    let on_add = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(add_entry(&value)))
    };

    let field = |idx: usize, field: SleepingField| {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
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
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-2">
                        <input
                            type="text"
                            class={INPUT_CLASSES}
                            placeholder="Room (e.g. Master Bedroom)"
                            value={item.room.clone()}
                            onchange={field(idx, SleepingField::Room)}
                        />
                        <select
                            class={INPUT_CLASSES}
                            onchange={field(idx, SleepingField::Bed)}
                        >
                            <option value="" selected={item.bed.is_empty()}>{"Bed type"}</option>
                            { for BED_OPTIONS.iter().map(|bed| html! {
                                <option value={*bed} selected={item.bed == *bed}>{*bed}</option>
                            }) }
                        </select>
                        <input
                            type="text"
                            class={INPUT_CLASSES}
                            placeholder="View (e.g. Garden)"
                            value={item.view.clone()}
                            onchange={field(idx, SleepingField::View)}
                        />
                        <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_remove}>
                            {"Remove"}
                        </button>
                    </div>
                }
            }) }
            <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_add}>
                {"+ Add bedroom"}
            </button>
        </div>
    }
}
