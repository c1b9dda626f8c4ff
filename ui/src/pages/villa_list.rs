use payloads::{
    forms::listing::{delete_confirmation, delete_row},
    responses,
};
use rust_decimal::Decimal;
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

/// Whole rupiah with thousands separators, e.g. `IDR 3.500.000`.
pub fn format_idr(amount: Decimal) -> String {
    let whole = amount.round().abs().to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let sign = if amount.is_sign_negative() && !whole.chars().all(|c| c == '0')
    {
        "-"
    } else {
        ""
    };
    format!("IDR {sign}{grouped}")
}

#[function_component]
pub fn VillaListPage() -> Html {
    use_title("Villas");
    let push_route = use_push_route();
    let list = use_reducer(ListRows::<responses::Villa>::default);

    let villas =
        use_fetch((), || async { get_api_client().list_villas().await });

    {
        let list = list.dispatcher();
        use_effect_with(villas.data.clone(), move |data| {
            if let Some(rows) = data.as_ref() {
                list.dispatch(RowsAction::Show(rows.clone()));
            }
        });
    }

    let on_delete = {
        let list = list.clone();
        Callback::from(move |villa: responses::Villa| {
            let id = villa.villa_id;
            if list.deleting.is_deleting(id)
                || !confirm(&delete_confirmation(&villa))
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
                    |id| async move { get_api_client().delete_villa(&id).await },
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
            <PageHeader title="Villas">
                <button
                    class={PRIMARY_BUTTON_CLASSES}
                    onclick={push_route.reform(|_| Route::NewVilla)}
                >
                    {"+ New villa"}
                </button>
            </PageHeader>
            {villas.render(
                "villas",
                |_| html! {
                    <VillaTable list={list.clone()} on_delete={on_delete.clone()} />
                },
                |e| html! { <CollectionError collection="Villas" error={e.clone()} /> },
            )}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VillaTableProps {
    list: UseReducerHandle<ListRows<responses::Villa>>,
    on_delete: Callback<responses::Villa>,
}

#[function_component]
fn VillaTable(props: &VillaTableProps) -> Html {
    let rows = &props.list.rows;

    if rows.is_empty() {
        return html! {
            <p class="py-12 text-center text-neutral-600 dark:text-neutral-400">
                {"No villas yet."}
            </p>
        };
    }

    html! {
        <div class="space-y-2">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("{} villas", rows.len())}
            </p>
            <table class="w-full text-sm text-left">
                <thead class="border-b border-neutral-200 dark:border-neutral-700">
                    <tr>
                        <th class="py-2">{"Villa"}</th>
                        <th class="py-2">{"Price / night"}</th>
                        <th class="py-2">{"Bedrooms"}</th>
                        <th class="py-2">{"Guests"}</th>
                        <th class="py-2">{"Created"}</th>
                        <th class="py-2 text-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|villa| {
                        let id = villa.villa_id;
                        let details = &villa.villa_details;
                        let is_deleting = props.list.deleting.is_deleting(id);
                        let on_delete = {
                            let villa = villa.clone();
                            props.on_delete.reform(move |_: MouseEvent| villa.clone())
                        };
                        html! {
                            <tr key={id.to_string()} class="border-b border-neutral-100 dark:border-neutral-800">
                                <td class="py-2">
                                    <div class="flex items-center gap-3">
                                        if !details.image_url.is_empty() {
                                            <img src={details.image_url.clone()} class="h-10 w-14 rounded object-cover" />
                                        }
                                        <span class="font-medium">{&details.name}</span>
                                    </div>
                                </td>
                                <td class="py-2">{format_idr(details.price_per_night)}</td>
                                <td class="py-2">{details.bedrooms}</td>
                                <td class="py-2">{details.guests}</td>
                                <td class="py-2">{format_date(villa.created_at)}</td>
                                <td class="py-2 text-right space-x-3">
                                    <Link<Route> to={Route::EditVilla { id }} classes="underline">
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

#[cfg(test)]
mod tests {
    use super::format_idr;
    use rust_decimal::dec;

    #[test]
    fn rupiah_formatting() {
        assert_eq!(format_idr(dec!(3500000)), "IDR 3.500.000");
        assert_eq!(format_idr(dec!(950000.40)), "IDR 950.000");
        assert_eq!(format_idr(dec!(999)), "IDR 999");
        assert_eq!(format_idr(dec!(0)), "IDR 0");
    }
}
