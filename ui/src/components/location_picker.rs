//! Latitude/longitude inputs plus a modal for picking a location on an
//! embedded map.

use payloads::forms::location::{
    Coordinates, GeolocationFailure, LocationPicker as PickerState,
    PRESET_LOCATIONS, embed_url,
};
use std::rc::Rc;
use wasm_bindgen::{JsCast, closure::Closure};
use yew::prelude::*;

use super::{
    INPUT_CLASSES, LABEL_CLASSES, Modal, PRIMARY_BUTTON_CLASSES,
    SECONDARY_BUTTON_CLASSES, event_value,
};

enum PickerAction {
    Open(Coordinates),
    Close,
    DraftLatitude(String),
    DraftLongitude(String),
    Preset(usize),
    Search(String),
    PositionFound(f64, f64),
    PositionFailed(GeolocationFailure),
    DismissAlert,
}

#[derive(Default, PartialEq)]
struct Picker(PickerState);

impl Reducible for Picker {
    type Action = PickerAction;

    fn reduce(self: Rc<Self>, action: PickerAction) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            PickerAction::Open(applied) => next.open(&applied),
            PickerAction::Close => next.cancel(),
            PickerAction::DraftLatitude(v) => next.set_draft_latitude(v),
            PickerAction::DraftLongitude(v) => next.set_draft_longitude(v),
            PickerAction::Preset(idx) => {
                if let Some(preset) = PRESET_LOCATIONS.get(idx) {
                    next.pick_preset(preset);
                }
            }
            PickerAction::Search(query) => next.search_query = query,
            PickerAction::PositionFound(lat, lng) => {
                next.position_found(lat, lng)
            }
            PickerAction::PositionFailed(f) => next.position_failed(f),
            PickerAction::DismissAlert => next.dismiss_alert(),
        }
        Rc::new(Picker(next))
    }
}

/// Ask the browser for the current position once.
fn request_position(picker: UseReducerDispatcher<Picker>) {
    let Some(geolocation) =
        web_sys::window().and_then(|w| w.navigator().geolocation().ok())
    else {
        picker.dispatch(PickerAction::PositionFailed(
            GeolocationFailure::Unsupported,
        ));
        return;
    };

    let on_success = {
        let picker = picker.clone();
        Closure::once_into_js(move |position: web_sys::Position| {
            let coords = position.coords();
            picker.dispatch(PickerAction::PositionFound(
                coords.latitude(),
                coords.longitude(),
            ));
        })
    };
    let on_error = {
        let picker = picker.clone();
        Closure::once_into_js(move |error: web_sys::PositionError| {
            tracing::warn!("geolocation failed: {}", error.message());
            picker.dispatch(PickerAction::PositionFailed(
                GeolocationFailure::Unavailable,
            ));
        })
    };

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
    ) {
        tracing::warn!("geolocation request rejected: {e:?}");
        picker.dispatch(PickerAction::PositionFailed(
            GeolocationFailure::Unavailable,
        ));
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Coordinates,
    pub on_change: Callback<Coordinates>,
}

#[function_component]
pub fn LocationPicker(props: &Props) -> Html {
    let picker = use_reducer(Picker::default);
    let state = &picker.0;

    // Manual inputs edit the applied coordinates directly.
    let on_latitude = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            on_change.emit(Coordinates {
                latitude: event_value(&e),
                ..value.clone()
            })
        })
    };
    let on_longitude = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            on_change.emit(Coordinates {
                longitude: event_value(&e),
                ..value.clone()
            })
        })
    };

    let on_open = {
        let picker = picker.dispatcher();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| {
            picker.dispatch(PickerAction::Open(value.clone()))
        })
    };
    let on_close = {
        let picker = picker.dispatcher();
        Callback::from(move |_| picker.dispatch(PickerAction::Close))
    };
    let on_apply = {
        let picker = picker.dispatcher();
        let draft = state.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(draft.clone());
            picker.dispatch(PickerAction::Close);
        })
    };

    let shown = props.value.or_default_location();

    html! {
        <div class="space-y-3">
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={LABEL_CLASSES}>{"Latitude"}</label>
                    <input
                        type="text"
                        class={INPUT_CLASSES}
                        placeholder={shown.latitude.clone()}
                        value={props.value.latitude.clone()}
                        oninput={on_latitude}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASSES}>{"Longitude"}</label>
                    <input
                        type="text"
                        class={INPUT_CLASSES}
                        placeholder={shown.longitude.clone()}
                        value={props.value.longitude.clone()}
                        oninput={on_longitude}
                    />
                </div>
            </div>
            <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_open}>
                {format!("📍 Pick on map ({}, {})", shown.latitude, shown.longitude)}
            </button>

            if state.is_open {
                <Modal title="Pick location" on_close={on_close.clone()} max_width="max-w-3xl">
                    <div>
                        <PickerBody picker={picker.clone()} />
                        <div class="flex justify-end gap-3 mt-6">
                            <button
                                type="button"
                                class={SECONDARY_BUTTON_CLASSES}
                                onclick={on_close.reform(|_: MouseEvent| ())}
                            >
                                {"Cancel"}
                            </button>
                            <button type="button" class={PRIMARY_BUTTON_CLASSES} onclick={on_apply}>
                                {"Apply location"}
                            </button>
                        </div>
                    </div>
                </Modal>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PickerBodyProps {
    picker: UseReducerHandle<Picker>,
}

#[function_component]
fn PickerBody(props: &PickerBodyProps) -> Html {
    let picker = &props.picker;
    let state = &picker.0;

    let on_search_input = {
        let picker = picker.dispatcher();
        Callback::from(move |e: InputEvent| {
            picker.dispatch(PickerAction::Search(event_value(&e)))
        })
    };
    let on_search = {
        let url = state.search_url();
        Callback::from(move |_: MouseEvent| {
            let Some(url) = &url else { return };
            if let Some(window) = web_sys::window()
                && let Err(e) = window.open_with_url_and_target(url, "_blank")
            {
                tracing::warn!("could not open map search: {e:?}");
            }
        })
    };
    let on_locate = {
        let picker = picker.dispatcher();
        Callback::from(move |_: MouseEvent| request_position(picker.clone()))
    };
    let on_dismiss = {
        let picker = picker.dispatcher();
        Callback::from(move |_: MouseEvent| {
            picker.dispatch(PickerAction::DismissAlert)
        })
    };
    let on_draft_latitude = {
        let picker = picker.dispatcher();
        Callback::from(move |e: InputEvent| {
            picker.dispatch(PickerAction::DraftLatitude(event_value(&e)))
        })
    };
    let on_draft_longitude = {
        let picker = picker.dispatcher();
        Callback::from(move |e: InputEvent| {
            picker.dispatch(PickerAction::DraftLongitude(event_value(&e)))
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex gap-2">
                <input
                    type="text"
                    class={INPUT_CLASSES}
                    placeholder="Search a place on Google Maps"
                    value={state.search_query.clone()}
                    oninput={on_search_input}
                />
                <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_search}>
                    {"Search"}
                </button>
                <button type="button" class={SECONDARY_BUTTON_CLASSES} onclick={on_locate}>
                    {"Use my location"}
                </button>
            </div>

            if let Some(alert) = state.alert {
                <div class="flex justify-between p-3 rounded-md bg-amber-50 \
                            dark:bg-amber-900/20 border border-amber-200 text-sm \
                            text-amber-800 dark:text-amber-300">
                    <span>{alert.message()}</span>
                    <button type="button" onclick={on_dismiss}>{"×"}</button>
                </div>
            }

            <iframe
                class="w-full h-72 rounded-md border-0"
                src={embed_url(&state.draft)}
                loading="lazy"
            />

            <div class="flex flex-wrap gap-2">
                { for PRESET_LOCATIONS.iter().enumerate().map(|(idx, preset)| {
                    let selected = state.draft.matches_preset(preset);
                    let on_pick = {
                        let picker = picker.dispatcher();
                        Callback::from(move |_: MouseEvent| {
                            picker.dispatch(PickerAction::Preset(idx))
                        })
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "px-3", "py-1", "text-sm", "rounded-full", "border",
                                if selected {
                                    "bg-neutral-900 text-white border-neutral-900"
                                } else {
                                    "border-neutral-300 text-neutral-700 dark:text-neutral-300"
                                }
                            )}
                            onclick={on_pick}
                        >
                            {preset.name}
                        </button>
                    }
                }) }
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={LABEL_CLASSES}>{"Latitude"}</label>
                    <input
                        type="text"
                        class={INPUT_CLASSES}
                        value={state.draft.latitude.clone()}
                        oninput={on_draft_latitude}
                    />
                </div>
                <div>
                    <label class={LABEL_CLASSES}>{"Longitude"}</label>
                    <input
                        type="text"
                        class={INPUT_CLASSES}
                        value={state.draft.longitude.clone()}
                        oninput={on_draft_longitude}
                    />
                </div>
            </div>
        </div>
    }
}
