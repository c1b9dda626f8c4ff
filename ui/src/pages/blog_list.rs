use payloads::{
    BlogPostId,
    forms::listing::{delete_confirmation, delete_row, toggle_published},
    responses,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{PageHeader, format_date};
use crate::{
    Route,
    components::{
        CollectionError, ListRows, PRIMARY_BUTTON_CLASSES, RowsAction,
        list_rows::{alert, confirm},
    },
    get_api_client,
    hooks::{use_fetch, use_push_route, use_title},
};

#[function_component]
pub fn BlogListPage() -> Html {
    use_title("Blog posts");
    let push_route = use_push_route();
    let list = use_reducer(ListRows::<responses::BlogPost>::default);

    let posts = use_fetch((), || async {
        get_api_client().list_blog_posts().await
    });

    {
        let list = list.dispatcher();
        use_effect_with(posts.data.clone(), move |data| {
            if let Some(rows) = data.as_ref() {
                list.dispatch(RowsAction::Show(rows.clone()));
            }
        });
    }

    // Optimistic: the new status stays on screen even if the write fails.
    let on_toggle = {
        let list = list.clone();
        Callback::from(move |id: BlogPostId| {
            let rows = list.rows.clone();
            let list = list.dispatcher();
            yew::platform::spawn_local(async move {
                let result = toggle_published(
                    &rows,
                    id,
                    |is_published| {
                        list.dispatch(RowsAction::SetPublished {
                            id,
                            is_published,
                        })
                    },
                    |req| async move {
                        get_api_client().set_blog_post_published(&req).await
                    },
                )
                .await;
                if let Err(message) = result {
                    alert(&message);
                }
            });
        })
    };

    let on_delete = {
        let list = list.clone();
        Callback::from(move |post: responses::BlogPost| {
            let id = post.blog_post_id;
            if list.deleting.is_deleting(id)
                || !confirm(&delete_confirmation(&post))
            {
                return;
            }
            let list = list.dispatcher();
            list.dispatch(RowsAction::BeginDelete(id));
            yew::platform::spawn_local(async move {
                let result = delete_row(
                    id,
                    |id| {
                        list.dispatch(RowsAction::FinishDelete {
                            id,
                            removed: true,
                        })
                    },
                    |id| async move {
                        get_api_client().delete_blog_post(&id).await
                    },
                )
                .await;
                if let Err(message) = result {
                    list.dispatch(RowsAction::FinishDelete {
                        id,
                        removed: false,
                    });
                    alert(&message);
                }
            });
        })
    };

    html! {
        <div>
            <PageHeader title="Blog posts">
                <button
                    class={PRIMARY_BUTTON_CLASSES}
                    onclick={push_route.reform(|_| Route::NewBlogPost)}
                >
                    {"+ New post"}
                </button>
            </PageHeader>
            {posts.render(
                "blog posts",
                |_| html! {
                    <BlogTable
                        list={list.clone()}
                        on_toggle={on_toggle.clone()}
                        on_delete={on_delete.clone()}
                    />
                },
                |e| html! { <CollectionError collection="Blog posts" error={e.clone()} /> },
            )}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BlogTableProps {
    list: UseReducerHandle<ListRows<responses::BlogPost>>,
    on_toggle: Callback<BlogPostId>,
    on_delete: Callback<responses::BlogPost>,
}

#[function_component]
fn BlogTable(props: &BlogTableProps) -> Html {
    let rows = &props.list.rows;

    if rows.is_empty() {
        return html! {
            <p class="py-12 text-center text-neutral-600 dark:text-neutral-400">
                {"No blog posts yet."}
            </p>
        };
    }

    html! {
        <div class="space-y-2">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("{} posts", rows.len())}
            </p>
            <table class="w-full text-sm text-left">
                <thead class="border-b border-neutral-200 dark:border-neutral-700">
                    <tr>
                        <th class="py-2">{"Title"}</th>
                        <th class="py-2">{"Category"}</th>
                        <th class="py-2">{"Author"}</th>
                        <th class="py-2">{"Status"}</th>
                        <th class="py-2">{"Created"}</th>
                        <th class="py-2 text-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|post| {
                        let id = post.blog_post_id;
                        let is_deleting = props.list.deleting.is_deleting(id);
                        let (status, status_class) = if post.is_published() {
                            ("Published", "bg-green-100 text-green-800")
                        } else {
                            ("Draft", "bg-neutral-100 text-neutral-700")
                        };
                        let on_delete = {
                            let post = post.clone();
                            props.on_delete.reform(move |_: MouseEvent| post.clone())
                        };
                        html! {
                            <tr key={id.to_string()} class="border-b border-neutral-100 dark:border-neutral-800">
                                <td class="py-2">
                                    <div class="font-medium">{&post.post_details.title}</div>
                                    <div class="text-xs text-neutral-500">{format!("/{}", post.post_details.slug)}</div>
                                </td>
                                <td class="py-2">{post.post_details.category.to_string()}</td>
                                <td class="py-2">{&post.post_details.author}</td>
                                <td class="py-2">
                                    <button
                                        class={classes!("px-2", "py-1", "rounded-full", "text-xs", status_class)}
                                        onclick={props.on_toggle.reform(move |_: MouseEvent| id)}
                                    >
                                        {status}
                                    </button>
                                </td>
                                <td class="py-2">{format_date(post.created_at)}</td>
                                <td class="py-2 text-right space-x-3">
                                    <Link<Route> to={Route::EditBlogPost { id }} classes="underline">
                                        {"Edit"}
                                    </Link<Route>>
                                    <button
                                        class="text-red-600 disabled:opacity-50"
                                        disabled={is_deleting}
                                        onclick={on_delete}
                                    >
                                        {if is_deleting { "Deleting..." } else { "Delete" }}
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
