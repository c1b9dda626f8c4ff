use crate::Route;
use crate::hooks::use_push_route;
use yew::prelude::*;

/// A navigation item in the admin sidebar.
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Overview",
        route: Route::Dashboard,
    },
    NavItem {
        title: "Villas",
        route: Route::Villas,
    },
    NavItem {
        title: "Blog",
        route: Route::BlogPosts,
    },
];

/// The section a route belongs to, for highlighting.
fn section(route: &Route) -> Route {
    match route {
        Route::BlogPosts | Route::NewBlogPost | Route::EditBlogPost { .. } => {
            Route::BlogPosts
        }
        Route::Villas | Route::NewVilla | Route::EditVilla { .. } => {
            Route::Villas
        }
        _ => Route::Dashboard,
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_route: Route,
    /// Called after a nav item is clicked (closes the mobile drawer).
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
}

const LINK_BASE_CLASSES: &str =
    "block px-4 py-2 text-sm transition-colors cursor-pointer";
const LINK_INACTIVE_CLASSES: &str = "text-neutral-600 dark:text-neutral-400 \
    hover:text-neutral-900 dark:hover:text-white \
    hover:bg-neutral-100 dark:hover:bg-neutral-800";
const LINK_ACTIVE_CLASSES: &str = "text-neutral-900 dark:text-white \
    bg-neutral-100 dark:bg-neutral-800 font-medium";

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    let push_route = use_push_route();
    let active_section = section(&props.active_route);

    html! {
        <nav class="py-4">
            <div class="px-4 pb-2 text-xs font-semibold uppercase tracking-wider \
                        text-neutral-500 dark:text-neutral-400">
                {"Villa Admin"}
            </div>
            <ul>
                { for NAV_ITEMS.iter().map(|item| {
                    let link_classes = format!(
                        "{} {}",
                        LINK_BASE_CLASSES,
                        if active_section == item.route {
                            LINK_ACTIVE_CLASSES
                        } else {
                            LINK_INACTIVE_CLASSES
                        }
                    );

                    let on_click = {
                        let push_route = push_route.clone();
                        let route = item.route.clone();
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| {
                            push_route.emit(route.clone());
                            if let Some(cb) = &on_navigate {
                                cb.emit(());
                            }
                        })
                    };

                    html! {
                        <li key={item.title}>
                            <div class={link_classes} onclick={on_click}>
                                {item.title}
                            </div>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
