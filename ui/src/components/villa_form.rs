use payloads::forms::{VillaForm, location::Coordinates};
use payloads::{AmenitiesDetail, HouseRules, ProximityItem, SleepingItem};
use yew::prelude::*;

use super::{
    AmenitiesEditor, FeatureTags, HouseRulesEditor, INPUT_CLASSES,
    ImageGalleryInput, LABEL_CLASSES, LocationPicker, PRIMARY_BUTTON_CLASSES,
    ProximityEditor, SECONDARY_BUTTON_CLASSES, SECTION_HEADING_CLASSES,
    SleepingEditor, event_value,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub initial: VillaForm,
    pub submit_label: AttrValue,
    pub is_busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<VillaForm>,
    pub on_cancel: Callback<()>,
}

/// A numeric input bound to one form field. Kept as typed until submit.
struct Field {
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&VillaForm) -> &String,
    set: fn(&mut VillaForm, String),
}

static NUMBER_FIELDS: [Field; 9] = [
    Field {
        id: "villa-price",
        label: "Price per night (IDR)",
        placeholder: "0",
        get: |f| &f.price_per_night,
        set: |f, v| f.price_per_night = v,
    },
    Field {
        id: "villa-bedrooms",
        label: "Bedrooms",
        placeholder: "1",
        get: |f| &f.bedrooms,
        set: |f, v| f.bedrooms = v,
    },
    Field {
        id: "villa-guests",
        label: "Guests",
        placeholder: "2",
        get: |f| &f.guests,
        set: |f, v| f.guests = v,
    },
    Field {
        id: "villa-bathrooms",
        label: "Bathrooms",
        placeholder: "1",
        get: |f| &f.bathrooms,
        set: |f, v| f.bathrooms = v,
    },
    Field {
        id: "villa-levels",
        label: "Levels",
        placeholder: "1",
        get: |f| &f.levels,
        set: |f, v| f.levels = v,
    },
    Field {
        id: "villa-pantry",
        label: "Pantry",
        placeholder: "0",
        get: |f| &f.pantry,
        set: |f, v| f.pantry = v,
    },
    Field {
        id: "villa-land-area",
        label: "Land area (m²)",
        placeholder: "0",
        get: |f| &f.land_area,
        set: |f, v| f.land_area = v,
    },
    Field {
        id: "villa-building-area",
        label: "Building area (m²)",
        placeholder: "0",
        get: |f| &f.building_area,
        set: |f, v| f.building_area = v,
    },
    Field {
        id: "villa-pool-area",
        label: "Pool area (m²)",
        placeholder: "0",
        get: |f| &f.pool_area,
        set: |f, v| f.pool_area = v,
    },
];

/// Create/edit form for a villa and all of its nested details.
#[function_component]
pub fn VillaFormView(props: &Props) -> Html {
    let form = use_state(|| props.initial.clone());

    let on_text = |set: fn(&mut VillaForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            set(&mut next, event_value(&e));
            form.set(next);
        })
    };

    // Nested editors hand back complete values.
    fn nested<T: 'static>(
        form: &UseStateHandle<VillaForm>,
        set: fn(&mut VillaForm, T),
    ) -> Callback<T> {
        let form = form.clone();
        Callback::from(move |value: T| {
            let mut next = (*form).clone();
            set(&mut next, value);
            form.set(next);
        })
    }

    let on_add_image = nested(&form, |f, url: String| f.add_image(url));
    let on_remove_image = nested(&form, |f, idx: usize| f.remove_image(idx));

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-8">
            if let Some(error) = &props.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Basic Information"}</h3>
                <div>
                    <label for="villa-name" class={LABEL_CLASSES}>{"Name *"}</label>
                    <input
                        id="villa-name"
                        type="text"
                        required={true}
                        class={INPUT_CLASSES}
                        value={form.name.clone()}
                        oninput={on_text(|f, v| f.name = v)}
                    />
                </div>
                <div>
                    <label for="villa-description" class={LABEL_CLASSES}>{"Description"}</label>
                    <textarea
                        id="villa-description"
                        rows="4"
                        class={INPUT_CLASSES}
                        value={form.description.clone()}
                        oninput={on_text(|f, v| f.description = v)}
                    />
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    { for NUMBER_FIELDS.iter().map(|field| html! {
                        <div key={field.id}>
                            <label for={field.id} class={LABEL_CLASSES}>{field.label}</label>
                            <input
                                id={field.id}
                                type="number"
                                step="any"
                                class={INPUT_CLASSES}
                                placeholder={field.placeholder}
                                value={(field.get)(&form).clone()}
                                oninput={on_text(field.set)}
                            />
                        </div>
                    }) }
                </div>
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Location"}</h3>
                <LocationPicker
                    value={form.coordinates.clone()}
                    on_change={nested(&form, |f, c: Coordinates| f.coordinates = c)}
                />
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Images"}</h3>
                <div>
                    <label for="villa-image" class={LABEL_CLASSES}>{"Main image URL"}</label>
                    <input
                        id="villa-image"
                        type="url"
                        class={INPUT_CLASSES}
                        placeholder="https://..."
                        value={form.image_url.clone()}
                        oninput={on_text(|f, v| f.image_url = v)}
                    />
                </div>
                <ImageGalleryInput
                    images={form.images.clone()}
                    on_add={on_add_image}
                    on_remove={on_remove_image}
                />
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Features"}</h3>
                <FeatureTags
                    tags={form.features.clone()}
                    on_change={nested(&form, |f, tags: Vec<String>| f.features = tags)}
                />
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"House Rules"}</h3>
                <HouseRulesEditor
                    value={form.house_rules.clone()}
                    on_change={nested(&form, |f, rules: HouseRules| f.house_rules = rules)}
                />
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Amenities"}</h3>
                <AmenitiesEditor
                    value={form.amenities.clone()}
                    on_change={nested(&form, |f, a: AmenitiesDetail| f.amenities = a)}
                />
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Nearby"}</h3>
                <ProximityEditor
                    value={form.proximity.clone()}
                    on_change={nested(&form, |f, p: Vec<ProximityItem>| f.proximity = p)}
                />
            </section>

            <section class="space-y-4">
                <h3 class={SECTION_HEADING_CLASSES}>{"Sleeping Arrangements"}</h3>
                <SleepingEditor
                    value={form.sleeping.clone()}
                    on_change={nested(&form, |f, s: Vec<SleepingItem>| f.sleeping = s)}
                />
            </section>

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
