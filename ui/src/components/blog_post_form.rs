use payloads::{BlogCategory, forms::BlogPostForm};
use yew::prelude::*;

use super::{
    INPUT_CLASSES, LABEL_CLASSES, MarkdownText, PRIMARY_BUTTON_CLASSES,
    SECONDARY_BUTTON_CLASSES, event_value,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Starting values; empty for a new post.
    #[prop_or_default]
    pub initial: BlogPostForm,
    pub submit_label: AttrValue,
    pub is_busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<BlogPostForm>,
    pub on_cancel: Callback<()>,
}

/// Create/edit form for a blog post.
#[function_component]
pub fn BlogPostFormView(props: &Props) -> Html {
    let form = use_state(|| props.initial.clone());
    let show_preview = use_state(|| false);

    let update = |apply: fn(&mut BlogPostForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, event_value(&e));
            form.set(next);
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(category) = BlogCategory::from_name(&event_value(&e)) {
                let mut next = (*form).clone();
                next.category = category;
                form.set(next);
            }
        })
    };
    let on_published = {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.is_published = !next.is_published;
            form.set(next);
        })
    };
    let on_toggle_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(!*show_preview))
    };
    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            if let Some(error) = &props.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label for="post-title" class={LABEL_CLASSES}>{"Title *"}</label>
                    <input
                        id="post-title"
                        type="text"
                        required={true}
                        class={INPUT_CLASSES}
                        value={form.title.clone()}
                        oninput={update(BlogPostForm::set_title)}
                    />
                </div>
                <div>
                    <label for="post-slug" class={LABEL_CLASSES}>{"Slug *"}</label>
                    <input
                        id="post-slug"
                        type="text"
                        required={true}
                        class={INPUT_CLASSES}
                        value={form.slug.clone()}
                        oninput={update(BlogPostForm::set_slug)}
                    />
                </div>
            </div>

            <div>
                <label for="post-excerpt" class={LABEL_CLASSES}>{"Excerpt"}</label>
                <textarea
                    id="post-excerpt"
                    rows="2"
                    class={INPUT_CLASSES}
                    value={form.excerpt.clone()}
                    oninput={update(|f, v| f.excerpt = v)}
                />
            </div>

            <div>
                <div class="flex items-center justify-between mb-2">
                    <label for="post-content" class="text-sm font-medium text-neutral-700 dark:text-neutral-300">
                        {"Content (markdown)"}
                    </label>
                    <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_toggle_preview}>
                        {if *show_preview { "Edit" } else { "Preview" }}
                    </button>
                </div>
                if *show_preview {
                    <div class="min-h-[16rem] p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                        <MarkdownText text={form.content.clone()} />
                    </div>
                } else {
                    <textarea
                        id="post-content"
                        rows="14"
                        class={classes!(INPUT_CLASSES, "font-mono")}
                        value={form.content.clone()}
                        oninput={update(|f, v| f.content = v)}
                    />
                }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div>
                    <label for="post-category" class={LABEL_CLASSES}>{"Category"}</label>
                    <select id="post-category" class={INPUT_CLASSES} onchange={on_category}>
                        { for BlogCategory::ALL.into_iter().map(|category| html! {
                            <option
                                value={category.to_string()}
                                selected={category == form.category}
                            >
                                {category.to_string()}
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label for="post-author" class={LABEL_CLASSES}>{"Author"}</label>
                    <input
                        id="post-author"
                        type="text"
                        class={INPUT_CLASSES}
                        value={form.author.clone()}
                        oninput={update(|f, v| f.author = v)}
                    />
                </div>
                <div>
                    <label for="post-image" class={LABEL_CLASSES}>{"Cover image URL"}</label>
                    <input
                        id="post-image"
                        type="url"
                        class={INPUT_CLASSES}
                        placeholder="https://..."
                        value={form.image_url.clone()}
                        oninput={update(|f, v| f.image_url = v)}
                    />
                </div>
            </div>

            if !form.image_url.trim().is_empty() {
                <img src={form.image_url.clone()} class="h-40 rounded-md object-cover" />
            }

            <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-neutral-300"
                    checked={form.is_published}
                    onchange={on_published}
                />
                {"Published"}
            </label>

            <div class="flex justify-end gap-3 pt-6 border-t border-neutral-200 dark:border-neutral-700">
                <button
                    type="button"
                    class={SECONDARY_BUTTON_CLASSES}
                    disabled={props.is_busy}
                    onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                >
                    {"Cancel"}
                </button>
                <button type="submit" class={PRIMARY_BUTTON_CLASSES} disabled={props.is_busy}>
                    {if props.is_busy { "Saving..." } else { props.submit_label.as_str() }}
                </button>
            </div>
        </form>
    }
}
