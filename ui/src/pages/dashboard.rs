use std::collections::HashMap;

use payloads::{BookingStatus, VillaId, responses};
use yew::prelude::*;

use super::{PageHeader, format_date, villa_list::format_idr};
use crate::{
    components::{
        CollectionError, SECONDARY_BUTTON_CLASSES, SECTION_HEADING_CLASSES,
    },
    get_api_client,
    hooks::{use_fetch, use_title},
};

const RECENT_BOOKINGS: usize = 10;

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");

    let stats =
        use_fetch((), || async { get_api_client().dashboard_stats().await });
    let bookings =
        use_fetch((), || async { get_api_client().list_bookings().await });
    let villas =
        use_fetch((), || async { get_api_client().list_villas().await });
    let experiences =
        use_fetch((), || async { get_api_client().list_experiences().await });

    let villa_names: HashMap<VillaId, String> = villas
        .data
        .as_ref()
        .map(|villas| {
            villas
                .iter()
                .map(|v| (v.villa_id, v.villa_details.name.clone()))
                .collect()
        })
        .unwrap_or_default();

    let on_refresh = {
        let refetches = [
            stats.refetch.clone(),
            bookings.refetch.clone(),
            villas.refetch.clone(),
            experiences.refetch.clone(),
        ];
        Callback::from(move |_: MouseEvent| {
            for refetch in &refetches {
                refetch.emit(());
            }
        })
    };
    let is_loading = stats.is_loading || bookings.is_loading;

    html! {
        <div class="space-y-8">
            <PageHeader title="Overview" subtitle="Bookings and revenue at a glance">
                <button
                    class={SECONDARY_BUTTON_CLASSES}
                    disabled={is_loading}
                    onclick={on_refresh}
                >
                    {if is_loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </PageHeader>

            {stats.render(
                "dashboard stats",
                |stats| html! { <StatCards stats={stats.clone()} /> },
                |e| html! { <CollectionError collection="Bookings" error={e.clone()} /> },
            )}

            <section>
                <h2 class={SECTION_HEADING_CLASSES}>{"Recent bookings"}</h2>
                {bookings.render(
                    "bookings",
                    |bookings| html! {
                        <BookingTable
                            bookings={bookings.iter().take(RECENT_BOOKINGS).cloned().collect::<Vec<_>>()}
                            villa_names={villa_names.clone()}
                        />
                    },
                    |e| html! { <CollectionError collection="Bookings" error={e.clone()} /> },
                )}
            </section>

            <section>
                <h2 class={SECTION_HEADING_CLASSES}>{"Experiences"}</h2>
                {experiences.render(
                    "experiences",
                    |experiences| html! {
                        <ExperienceList experiences={experiences.clone()} />
                    },
                    |e| html! { <CollectionError collection="Experiences" error={e.clone()} /> },
                )}
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardsProps {
    stats: responses::DashboardStats,
}

#[function_component]
fn StatCards(props: &StatCardsProps) -> Html {
    let stats = &props.stats;
    let cards = [
        ("Total revenue", format_idr(stats.total_revenue)),
        ("Bookings", stats.total_bookings.to_string()),
        ("Occupancy", format!("{:.0}%", stats.occupancy_rate)),
        ("Active guests", stats.active_guests.to_string()),
    ];

    html! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            { for cards.into_iter().map(|(label, value)| html! {
                <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 p-4">
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">{label}</p>
                    <p class="text-2xl font-semibold text-neutral-900 dark:text-neutral-100">
                        {value}
                    </p>
                </div>
            }) }
        </div>
    }
}

fn status_classes(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "bg-yellow-100 text-yellow-800",
        BookingStatus::Confirmed => "bg-green-100 text-green-800",
        BookingStatus::Cancelled => "bg-red-100 text-red-800",
        BookingStatus::Completed => "bg-neutral-200 text-neutral-800",
    }
}

#[derive(Properties, PartialEq)]
struct BookingTableProps {
    bookings: Vec<responses::Booking>,
    villa_names: HashMap<VillaId, String>,
}

#[function_component]
fn BookingTable(props: &BookingTableProps) -> Html {
    if props.bookings.is_empty() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">{"No bookings yet."}</p>
        };
    }

    html! {
        <table class="w-full text-sm text-left">
            <thead class="border-b border-neutral-200 dark:border-neutral-700">
                <tr>
                    <th class="py-2">{"Guest"}</th>
                    <th class="py-2">{"Villa"}</th>
                    <th class="py-2">{"Dates"}</th>
                    <th class="py-2">{"Total"}</th>
                    <th class="py-2">{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.bookings.iter().map(|booking| {
                    let villa = props
                        .villa_names
                        .get(&booking.villa_id)
                        .map(String::as_str)
                        .unwrap_or("Unknown villa");
                    html! {
                        <tr key={booking.id.to_string()} class="border-b border-neutral-100 dark:border-neutral-800">
                            <td class="py-2">
                                <div class="font-medium">{&booking.guest_name}</div>
                                <div class="text-xs text-neutral-500">{&booking.guest_email}</div>
                            </td>
                            <td class="py-2">{villa}</td>
                            <td class="py-2">
                                {format!("{} → {}", booking.start_date, booking.end_date)}
                            </td>
                            <td class="py-2">{format_idr(booking.total_price)}</td>
                            <td class="py-2">
                                <span class={classes!("rounded-full", "px-2", "py-0.5", "text-xs", status_classes(booking.status))}>
                                    {booking.status.to_string()}
                                </span>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceListProps {
    experiences: Vec<responses::Experience>,
}

#[function_component]
fn ExperienceList(props: &ExperienceListProps) -> Html {
    if props.experiences.is_empty() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">{"No experiences yet."}</p>
        };
    }

    html! {
        <ul class="grid gap-4 sm:grid-cols-2">
            { for props.experiences.iter().map(|experience| html! {
                <li key={experience.id.to_string()} class="flex gap-3 rounded-lg border border-neutral-200 dark:border-neutral-700 p-3">
                    if !experience.image_url.is_empty() {
                        <img src={experience.image_url.clone()} class="h-16 w-16 rounded object-cover" />
                    }
                    <div>
                        <p class="font-medium">{&experience.title}</p>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {&experience.description}
                        </p>
                        <p class="text-xs text-neutral-500">{format_date(experience.created_at)}</p>
                    </div>
                </li>
            }) }
        </ul>
    }
}
