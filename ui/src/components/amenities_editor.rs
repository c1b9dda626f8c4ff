use payloads::{
    AmenitiesDetail, forms::amenities::AmenitiesEditor as EditorState,
};
use yew::prelude::*;

use super::{INPUT_CLASSES, SECONDARY_BUTTON_CLASSES, event_value};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: AmenitiesDetail,
    pub on_change: Callback<AmenitiesDetail>,
}

/// Run one editor operation against the current value, handing any new
/// value to the form.
fn amend<F>(
    editor: &UseStateHandle<EditorState>,
    value: &AmenitiesDetail,
    on_change: &Callback<AmenitiesDetail>,
    op: F,
) -> Callback<()>
where
    F: Fn(&mut EditorState, &AmenitiesDetail) -> Option<AmenitiesDetail>
        + 'static,
{
    let editor = editor.clone();
    let value = value.clone();
    let on_change = on_change.clone();
    Callback::from(move |_| {
        let mut next_editor = (*editor).clone();
        let next = op(&mut next_editor, &value);
        editor.set(next_editor);
        if let Some(next) = next {
            on_change.emit(next);
        }
    })
}

fn on_enter(action: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            action.emit(());
        }
    })
}

#[function_component]
pub fn AmenitiesEditor(props: &Props) -> Html {
    let editor = use_state(EditorState::default);

    let on_category_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*editor).clone();
            next.set_pending_category(event_value(&e));
            editor.set(next);
        })
    };
    let add_category =
        amend(&editor, &props.value, &props.on_change, |ed, value| {
            ed.add_category(value)
        });

    let categories = editor.categories(&props.value);

    html! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { for categories.into_iter().map(|category| {
                    let items = props.value.get(&category).cloned().unwrap_or_default();

                    let on_item_input = {
                        let editor = editor.clone();
                        let category = category.clone();
                        Callback::from(move |e: InputEvent| {
                            let mut next = (*editor).clone();
                            next.set_pending_item(&category, event_value(&e));
                            editor.set(next);
                        })
                    };
                    let add_item = {
                        let category = category.clone();
                        amend(&editor, &props.value, &props.on_change, move |ed, value| {
                            ed.add_item(value, &category)
                        })
                    };

                    html! {
                        <div key={category.clone()} class="p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                            <h4 class="text-sm font-semibold mb-2">{&category}</h4>
                            <ul class="flex flex-wrap gap-2 mb-3">
                                { for items.iter().enumerate().map(|(idx, item)| {
                                    let remove = {
                                        let category = category.clone();
                                        amend(&editor, &props.value, &props.on_change, move |ed, value| {
                                            ed.remove_item(value, &category, idx)
                                        })
                                    };
                                    html! {
                                        <li class="flex items-center gap-1 px-2 py-1 text-sm rounded bg-neutral-100 dark:bg-neutral-700">
                                            {item}
                                            <button
                                                type="button"
                                                class="text-neutral-400 hover:text-red-600"
                                                onclick={remove.reform(|_: MouseEvent| ())}
                                            >
                                                {"×"}
                                            </button>
                                        </li>
                                    }
                                }) }
                            </ul>
                            <div class="flex gap-2">
                                <input
                                    type="text"
                                    class={INPUT_CLASSES}
                                    placeholder={format!("Add to {category}")}
                                    value={editor.pending_item(&category).to_string()}
                                    oninput={on_item_input}
                                    onkeydown={on_enter(add_item.clone())}
                                />
                                <button
                                    type="button"
                                    class={SECONDARY_BUTTON_CLASSES}
                                    onclick={add_item.reform(|_: MouseEvent| ())}
                                >
                                    {"Add"}
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div class="flex gap-2">
                <input
                    type="text"
                    class={INPUT_CLASSES}
                    placeholder="New category"
                    value={editor.pending_category().to_string()}
                    oninput={on_category_input}
                    onkeydown={on_enter(add_category.clone())}
                />
                <button
                    type="button"
                    class={SECONDARY_BUTTON_CLASSES}
                    onclick={add_category.reform(|_: MouseEvent| ())}
                >
                    {"Add category"}
                </button>
            </div>
        </div>
    }
}
