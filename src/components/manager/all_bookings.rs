// ============================================================================
// ALL BOOKINGS - LIBRO MAYOR DE RESERVAS
// ============================================================================
// Histórico paginado con filtro por estado y búsqueda local. Cancelar una
// reserva recarga la página actual para reflejar el estado nuevo.
// ============================================================================

use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::booking_detail::BookingDetail;
use crate::config::CONFIG;
use crate::hooks::use_list;
use crate::models::{BookingRecord, BookingStatus};
use crate::services::manager_api;
use crate::state::MutationKind;
use crate::utils::dates::{format_numeric_date, format_timestamp};

// None = sin filtro, el chip "All"
const STATUS_FILTERS: &[(Option<BookingStatus>, &str)] = &[
    (None, "ALL"),
    (Some(BookingStatus::Pending), "PENDING"),
    (Some(BookingStatus::Confirmed), "CONFIRMED"),
    (Some(BookingStatus::Completed), "COMPLETED"),
    (Some(BookingStatus::Cancelled), "CANCELLED"),
    (Some(BookingStatus::Refunded), "REFUNDED"),
];

#[function_component(AllBookings)]
pub fn all_bookings() -> Html {
    let list = use_list::<BookingRecord>();
    let search = use_state(String::new);
    let status_filter = use_state(|| None::<BookingStatus>);
    let selected = use_state(|| None::<i64>);
    let canceling = use_mut_ref(HashSet::<i64>::new);
    let redraw = use_force_update();

    let page_size = CONFIG.page_config.history_page_size;

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            list.load(0, manager_api::get_all_bookings(0, page_size));
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let sync = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            let page = list.page();
            list.load(page, manager_api::get_all_bookings(page, page_size));
        })
    };

    let go_to = {
        let list = list.clone();
        Callback::from(move |page: u32| {
            list.load(page, manager_api::get_all_bookings(page, page_size));
        })
    };

    let on_cancel = {
        let list = list.clone();
        let canceling = canceling.clone();
        let redraw = redraw.clone();

        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .unwrap()
                .confirm_with_message("Are you sure you want to cancel this booking?")
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            if !canceling.borrow_mut().insert(id) {
                return;
            }
            redraw.force_update();

            let after = {
                let canceling = canceling.clone();
                let redraw = redraw.clone();
                Callback::from(move |result: Result<(), String>| {
                    canceling.borrow_mut().remove(&id);
                    redraw.force_update();
                    if let Err(message) = result {
                        let shown = if message.is_empty() {
                            "Failed to cancel booking".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                })
            };

            list.mutate(
                MutationKind::Update,
                manager_api::cancel_booking(id),
                move |page| manager_api::get_all_bookings(page, page_size),
                after,
            );
        })
    };

    let state = list.snapshot();
    let query = search.to_lowercase();
    let filtered: Vec<BookingRecord> = state
        .items()
        .iter()
        .filter(|b| {
            let matches_search = b.reference.to_lowercase().contains(&query)
                || b.service_name.to_lowercase().contains(&query)
                || b.user.name.to_lowercase().contains(&query);
            let matches_status = status_filter.map_or(true, |wanted| b.status == wanted);
            matches_search && matches_status
        })
        .cloned()
        .collect();

    let page = state.page();
    let total_pages = state.total_pages();
    let prev_disabled = state.is_loading() || page == 0;
    let next_disabled = state.is_loading() || page + 1 >= total_pages;

    html! {
        <div class="screen all-bookings">
            <div class="screen-heading split">
                <div>
                    <span class="section-tag">{"🧾 History"}</span>
                    <h2>{"Reservation Ledger"}</h2>
                    <p>{"Comprehensive overview of all ground bookings across all operational states."}</p>
                </div>
                <div class="stat-card square">
                    <p class="field-label">{"Total Records"}</p>
                    <div class="stat-row">
                        <h3>{state.total_elements()}</h3>
                        <span class="stat-pill outline">{"ALL TIME"}</span>
                    </div>
                </div>
            </div>

            <div class="control-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by ref, service or user..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <div class="status-filters">
                    { for STATUS_FILTERS.iter().map(|(choice, label)| {
                        let choice = *choice;
                        let active = *status_filter == choice;
                        let status_filter = status_filter.clone();
                        html! {
                            <button
                                class={classes!("filter-chip", active.then_some("active"))}
                                onclick={Callback::from(move |_| status_filter.set(choice))}
                            >
                                {*label}
                            </button>
                        }
                    }) }
                </div>
                <button class="btn-ghost" onclick={sync} disabled={state.is_loading()}>
                    {"Sync"}
                </button>
            </div>

            if state.is_loading() && state.items().is_empty() {
                <div class="screen-loading">
                    <div class="spinner"></div>
                    <p class="loading-title">{"Data Engine Initializing"}</p>
                    <p class="loading-sub">{"Reconstructing reservation timeline..."}</p>
                </div>
            } else if let Some(message) = state.error() {
                <div class="screen-error">
                    <h3>{"Sync Failure"}</h3>
                    <p>{message.to_string()}</p>
                    <button class="btn-danger" onclick={go_to.reform(move |_| page)}>
                        {"Reconnect Hub"}
                    </button>
                </div>
            } else if filtered.is_empty() {
                <div class="screen-empty">
                    <p class="empty-title">{"No Matches Found"}</p>
                    <p class="empty-sub">{"Refine your search parameters"}</p>
                </div>
            } else {
                <div class="booking-cards">
                    { for filtered.iter().map(|booking| {
                        let id = booking.id;
                        let is_canceling = canceling.borrow().contains(&id);
                        let cancellable = booking.status.is_cancellable();

                        html! {
                            <div class="ledger-card" key={id}>
                                <div class="ledger-identity">
                                    <div class="chip-row">
                                        <span class={classes!("status-chip", booking.status.css_class())}>
                                            {booking.status.label()}
                                        </span>
                                        <span class="ref-chip muted">{booking.reference.clone()}</span>
                                    </div>
                                    <h3>{booking.service_name.clone()}</h3>
                                    <div class="meta-row">
                                        <span class="resource-tag">{booking.resource_name.clone()}</span>
                                        <span class="created-stamp">{format_timestamp(&booking.created_at)}</span>
                                    </div>
                                </div>

                                <div class="ledger-details">
                                    <div>
                                        <p class="field-label">{"Client Info"}</p>
                                        <p class="field-value">{booking.user.name.clone()}</p>
                                        <p class="field-label">{"Financials"}</p>
                                        <p class="field-value">{format!("₹{}", booking.amount_breakdown.total_amount)}</p>
                                        <p class="field-sub">{format!("Inc. Fee (₹{})", booking.amount_breakdown.platform_fee)}</p>
                                    </div>
                                    <div class="text-right">
                                        <p class="field-label">{"Date"}</p>
                                        <p class="field-value">{format_numeric_date(&booking.booking_date)}</p>
                                        <p class="field-label">{"Timeslot"}</p>
                                        <p class="field-value accent">{format!("{} - {}", booking.start_time, booking.end_time)}</p>
                                    </div>
                                </div>

                                <div class="ledger-actions">
                                    <div class="subtotal-card">
                                        <p class="field-label">{"Subtotal"}</p>
                                        <h4>{format!("₹{}", booking.amount_breakdown.slot_subtotal)}</h4>
                                    </div>
                                    <button
                                        class="btn-outline"
                                        onclick={{
                                            let selected = selected.clone();
                                            Callback::from(move |_| selected.set(Some(id)))
                                        }}
                                    >
                                        {"View"}
                                    </button>
                                    if cancellable {
                                        <button
                                            class="btn-danger outline"
                                            disabled={is_canceling}
                                            onclick={on_cancel.reform(move |_| id)}
                                        >
                                            if is_canceling { <span class="btn-spinner"></span> }
                                            {"Cancel Booking"}
                                        </button>
                                    }
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="pager">
                    <button
                        class="btn-ghost"
                        disabled={prev_disabled}
                        onclick={go_to.reform(move |_| page.saturating_sub(1))}
                    >
                        {"Previous"}
                    </button>
                    <span class="pager-label">
                        {format!("Page {} of {}", page + 1, total_pages.max(1))}
                    </span>
                    <button
                        class="btn-ghost"
                        disabled={next_disabled}
                        onclick={go_to.reform(move |_| page + 1)}
                    >
                        {"Next"}
                    </button>
                </div>
            }

            if let Some(booking_id) = *selected {
                <BookingDetail
                    {booking_id}
                    on_close={{
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(None))
                    }}
                />
            }
        </div>
    }
}
