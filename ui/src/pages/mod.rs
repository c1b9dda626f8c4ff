pub mod blog_edit;
pub mod blog_list;
pub mod blog_new;
pub mod dashboard;
pub mod not_found;
pub mod villa_edit;
pub mod villa_list;
pub mod villa_new;

pub use blog_edit::EditBlogPostPage;
pub use blog_list::BlogListPage;
pub use blog_new::NewBlogPostPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use villa_edit::EditVillaPage;
pub use villa_list::VillaListPage;
pub use villa_new::NewVillaPage;

use yew::prelude::*;

/// Page title row with an optional action on the right.
#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn PageHeader(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex items-center justify-between mb-6">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {&props.title}
                </h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">{subtitle}</p>
                }
            </div>
            {props.children.clone()}
        </div>
    }
}

/// Calendar date of a timestamp, for table cells.
pub fn format_date(timestamp: jiff::Timestamp) -> String {
    timestamp.strftime("%Y-%m-%d").to_string()
}
