use yew::Event;

pub mod amenities_editor;
pub mod blog_post_form;
pub mod collection_error;
pub mod feature_tags;
pub mod house_rules_editor;
pub mod image_gallery_input;
pub mod layout;
pub mod list_rows;
pub mod location_picker;
pub mod markdown_text;
pub mod modal;
pub mod proximity_editor;
pub mod sleeping_editor;
pub mod toast;
pub mod villa_form;

pub use amenities_editor::AmenitiesEditor;
pub use blog_post_form::BlogPostFormView;
pub use collection_error::CollectionError;
pub use feature_tags::FeatureTags;
pub use house_rules_editor::HouseRulesEditor;
pub use image_gallery_input::ImageGalleryInput;
pub use layout::AdminLayout;
pub use list_rows::{ListRows, RowsAction};
pub use location_picker::LocationPicker;
pub use markdown_text::MarkdownText;
pub use modal::Modal;
pub use proximity_editor::ProximityEditor;
pub use sleeping_editor::SleepingEditor;
pub use toast::ToastContainer;
pub use villa_form::VillaFormView;

pub const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md shadow-sm bg-white dark:bg-neutral-700 \
    text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2 \
    focus:ring-neutral-500 focus:border-neutral-500";

pub const LABEL_CLASSES: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

pub const SECTION_HEADING_CLASSES: &str = "text-lg font-semibold \
    text-neutral-900 dark:text-neutral-100 border-b border-neutral-200 \
    dark:border-neutral-700 pb-2";

pub const SECONDARY_BUTTON_CLASSES: &str = "px-3 py-2 text-sm font-medium \
    text-neutral-700 dark:text-neutral-300 bg-white dark:bg-neutral-700 \
    border border-neutral-300 dark:border-neutral-600 rounded-md \
    hover:bg-neutral-50 dark:hover:bg-neutral-600 \
    disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

pub const PRIMARY_BUTTON_CLASSES: &str = "px-4 py-2 text-sm font-medium \
    text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 \
    dark:text-neutral-900 dark:hover:bg-neutral-200 rounded-md \
    disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

/// Value of the input, select or textarea that fired `e`.
pub fn event_value(e: &Event) -> String {
    use wasm_bindgen::JsCast;

    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>()
    {
        select.value()
    } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>()
    {
        area.value()
    } else {
        String::new()
    }
}
