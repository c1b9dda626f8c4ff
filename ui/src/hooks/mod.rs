pub mod use_fetch;
pub mod use_push_route;
pub mod use_title;

pub use use_fetch::use_fetch;
pub use use_push_route::use_push_route;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
