use payloads::forms::features::{
    FeatureTagInput, TagKey, add_tag, available_presets, remove_tag,
};
use yew::prelude::*;

use super::event_value;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tags: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

/// Tag input: Enter commits the typed text, Backspace on an empty input
/// removes the last tag, and unused presets can be added with one click.
#[function_component]
pub fn FeatureTags(props: &Props) -> Html {
    let input = use_state(FeatureTagInput::default);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            input.set(FeatureTagInput {
                input: event_value(&e),
            })
        })
    };

    let on_keydown = {
        let input = input.clone();
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            let mut next = (*input).clone();
            let outcome = next.on_key(&tags, TagKey::from_key_name(&e.key()));
            if outcome.prevent_default {
                e.prevent_default();
            }
            input.set(next);
            if let Some(tags) = outcome.tags {
                on_change.emit(tags);
            }
        })
    };

    html! {
        <div class="space-y-3">
            <div class="flex flex-wrap items-center gap-2 p-2 rounded-md border \
                        border-neutral-300 dark:border-neutral-600">
                { for props.tags.iter().enumerate().map(|(idx, tag)| {
                    let on_remove = {
                        let tags = props.tags.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_change.emit(remove_tag(&tags, idx))
                        })
                    };
                    html! {
                        <span class="flex items-center gap-1 px-2 py-1 text-sm rounded \
                                     bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900">
                            {tag}
                            <button type="button" onclick={on_remove}>{"×"}</button>
                        </span>
                    }
                }) }
                <input
                    type="text"
                    class="flex-1 min-w-[8rem] px-2 py-1 bg-transparent focus:outline-none"
                    placeholder="Type a feature and press Enter"
                    value={input.input.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
            </div>
            <div class="flex flex-wrap gap-2">
                { for available_presets(&props.tags).into_iter().map(|preset| {
                    let on_add = {
                        let tags = props.tags.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(next) = add_tag(&tags, preset) {
                                on_change.emit(next);
                            }
                        })
                    };
                    html! {
                        <button
                            type="button"
                            class="px-2 py-1 text-xs rounded border border-dashed \
                                   border-neutral-400 text-neutral-600 dark:text-neutral-300 \
                                   hover:bg-neutral-100 dark:hover:bg-neutral-700"
                            onclick={on_add}
                        >
                            {format!("+ {preset}")}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
