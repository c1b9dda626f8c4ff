use payloads::forms::BlogPostForm;
use yew::prelude::*;

use super::PageHeader;
use crate::{
    Route, components::BlogPostFormView, get_api_client,
    hooks::{use_push_route, use_title},
};

#[function_component]
pub fn NewBlogPostPage() -> Html {
    use_title("New blog post");
    let push_route = use_push_route();
    let is_busy = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);

    let on_submit = {
        let is_busy = is_busy.clone();
        let error = error.clone();
        let push_route = push_route.clone();
        Callback::from(move |form: BlogPostForm| {
            let details = form.into_details();
            let is_busy = is_busy.clone();
            let error = error.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                is_busy.set(true);
                error.set(None);

                match get_api_client().create_blog_post(&details).await {
                    Ok(blog_post_id) => {
                        tracing::info!(%blog_post_id, "blog post created");
                        push_route.emit(Route::BlogPosts);
                    }
                    Err(e) => error.set(Some(e.to_string().into())),
                }

                is_busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl">
            <PageHeader title="New blog post" />
            <BlogPostFormView
                submit_label="Create post"
                is_busy={*is_busy}
                error={(*error).clone()}
                {on_submit}
                on_cancel={push_route.reform(|_| Route::BlogPosts)}
            />
        </div>
    }
}
