use payloads::{HouseRules, forms::house_rules::HouseRulesEdit};
use yew::prelude::*;

use super::{INPUT_CLASSES, LABEL_CLASSES, event_value};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: HouseRules,
    pub on_change: Callback<HouseRules>,
}

#[function_component]
pub fn HouseRulesEditor(props: &Props) -> Html {
    // Every edit hands the complete record back to the form.
    let edit = |make: fn(String) -> HouseRulesEdit| {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            on_change.emit(value.apply(make(event_value(&e))));
        })
    };
    let toggle = |edit: HouseRulesEdit| {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: Event| on_change.emit(value.apply(edit.clone())))
    };

    let rules = &props.value;
    let toggles = [
        ("Parties allowed", rules.parties, HouseRulesEdit::ToggleParties),
        ("Smoking allowed", rules.smoking, HouseRulesEdit::ToggleSmoking),
        ("Pets allowed", rules.pets, HouseRulesEdit::TogglePets),
    ];

    html! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div>
                    <label class={LABEL_CLASSES}>{"Check-in"}</label>
                    <input
                        type="time"
                        class={INPUT_CLASSES}
                        value={rules.check_in.clone()}
                        onchange={edit(HouseRulesEdit::CheckIn)}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASSES}>{"Check-out"}</label>
                    <input
                        type="time"
                        class={INPUT_CLASSES}
                        value={rules.check_out.clone()}
                        onchange={edit(HouseRulesEdit::CheckOut)}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASSES}>{"Quiet hours"}</label>
                    <input
                        type="text"
                        class={INPUT_CLASSES}
                        placeholder="22:00 - 07:00"
                        value={rules.quiet_hours.clone()}
                        onchange={edit(HouseRulesEdit::QuietHours)}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASSES}>{"Max guests"}</label>
                    <input
                        type="number"
                        min="1"
                        class={INPUT_CLASSES}
                        value={rules.max_guests.to_string()}
                        onchange={edit(HouseRulesEdit::MaxGuests)}
                    />
                </div>
            </div>
            <div class="flex flex-wrap gap-6">
                { for toggles.into_iter().map(|(label, checked, flip)| html! {
                    <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                        <input
                            type="checkbox"
                            class="h-4 w-4 rounded border-neutral-300"
                            {checked}
                            onchange={toggle(flip)}
                        />
                        {label}
                    </label>
                }) }
            </div>
        </div>
    }
}
