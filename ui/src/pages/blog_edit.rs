use payloads::{BlogPostId, forms::BlogPostForm, requests::UpdateBlogPost};
use yew::prelude::*;

use super::PageHeader;
use crate::{
    Route,
    components::{BlogPostFormView, CollectionError},
    get_api_client,
    hooks::{use_fetch, use_push_route, use_title},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: BlogPostId,
}

#[function_component]
pub fn EditBlogPostPage(props: &Props) -> Html {
    use_title("Edit blog post");
    let blog_post_id = props.id;
    let push_route = use_push_route();
    let is_busy = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);

    let post = use_fetch(blog_post_id, move || async move {
        get_api_client().get_blog_post(&blog_post_id).await
    });

    let on_submit = {
        let is_busy = is_busy.clone();
        let error = error.clone();
        let push_route = push_route.clone();
        Callback::from(move |form: BlogPostForm| {
            let req = UpdateBlogPost {
                blog_post_id,
                post_details: form.into_details(),
            };
            let is_busy = is_busy.clone();
            let error = error.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                is_busy.set(true);
                error.set(None);

                match get_api_client().update_blog_post(&req).await {
                    Ok(_) => push_route.emit(Route::BlogPosts),
                    Err(e) => error.set(Some(e.to_string().into())),
                }

                is_busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-4xl">
            <PageHeader title="Edit blog post" />
            {post.render(
                "blog post",
                |post| html! {
                    <BlogPostFormView
                        key={post.blog_post_id.to_string()}
                        initial={BlogPostForm::from(post)}
                        submit_label="Save changes"
                        is_busy={*is_busy}
                        error={(*error).clone()}
                        on_submit={on_submit.clone()}
                        on_cancel={push_route.reform(|_| Route::BlogPosts)}
                    />
                },
                |e| html! {
                    <CollectionError collection="Blog posts" error={e.clone()} />
                },
            )}
        </div>
    }
}
