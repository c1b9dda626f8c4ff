use payloads::{APIClient, BlogPostId, VillaId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;

use components::{AdminLayout, ToastContainer};
use contexts::toast::ToastProvider;
use pages::*;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            web_sys::window().and_then(|window| window.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/blog")]
    BlogPosts,
    #[at("/dashboard/blog/new")]
    NewBlogPost,
    #[at("/dashboard/blog/:id")]
    EditBlogPost { id: BlogPostId },
    #[at("/dashboard/villas")]
    Villas,
    #[at("/dashboard/villas/new")]
    NewVilla,
    #[at("/dashboard/villas/:id")]
    EditVilla { id: VillaId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => return html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::BlogPosts => html! { <BlogListPage /> },
        Route::NewBlogPost => html! { <NewBlogPostPage /> },
        Route::EditBlogPost { id } => html! { <EditBlogPostPage {id} /> },
        Route::Villas => html! { <VillaListPage /> },
        Route::NewVilla => html! { <NewVillaPage /> },
        Route::EditVilla { id } => html! { <EditVillaPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! { <AdminLayout>{page}</AdminLayout> }
}
