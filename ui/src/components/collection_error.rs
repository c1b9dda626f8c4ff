use payloads::{ClientError, forms::listing::load_error_message};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties)]
pub struct Props {
    /// Display name of the collection, e.g. "Villas".
    pub collection: AttrValue,
    pub error: Rc<ClientError>,
}

// ClientError wraps reqwest::Error, so errors compare by identity.
impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.collection == other.collection
            && Rc::ptr_eq(&self.error, &other.error)
    }
}

/// Why a list could not be loaded. A collection whose table was never
/// created gets setup instructions.
#[function_component]
pub fn CollectionError(props: &Props) -> Html {
    let message = load_error_message(&props.collection, &props.error);

    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                    border-red-200 dark:border-red-800 space-y-2">
            <p class="text-sm font-medium text-red-700 dark:text-red-400">{message}</p>
            if props.error.is_missing_collection() {
                <p class="text-sm text-red-700 dark:text-red-400">
                    {"Apply the migrations in "}
                    <code class="font-mono">{"api/migrations"}</code>
                    {" to the database, for example by restarting the API \
                      (it migrates on startup) or with "}
                    <code class="font-mono">{"sqlx migrate run"}</code>
                    {"."}
                </p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_compare_errors_by_identity() {
        let error = Rc::new(ClientError::MissingCollection("gone".into()));
        let props = Props {
            collection: "Villas".into(),
            error: error.clone(),
        };
        let same = Props {
            collection: "Villas".into(),
            error,
        };
        let other = Props {
            collection: "Villas".into(),
            error: Rc::new(ClientError::MissingCollection("gone".into())),
        };
        assert!(props == same);
        assert!(props != other);
    }
}
