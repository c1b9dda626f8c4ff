use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop or the close
/// button calls `on_close`; the owner decides what closing discards.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div class={format!(
                "bg-white dark:bg-neutral-800 rounded-lg shadow-xl w-full p-6 {}",
                props.max_width
            )}>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&props.title}
                    </h3>
                    <button
                        type="button"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        class="text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200"
                        aria-label="Close"
                    >
                        <span class="text-lg leading-none">{"×"}</span>
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
