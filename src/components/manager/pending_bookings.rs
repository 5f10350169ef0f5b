// ============================================================================
// PENDING BOOKINGS - COLA DE APROBACIÓN MANUAL
// ============================================================================
// Lista paginada de reservas PENDING. Aprobar o cancelar saca la fila de la
// cola sin recargar; cada fila lleva su propio busy para no bloquear el resto.
// ============================================================================

use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_list;
use crate::models::PendingBooking;
use crate::services::manager_api;
use crate::utils::dates::format_short_date;

#[function_component(PendingBookings)]
pub fn pending_bookings() -> Html {
    let list = use_list::<PendingBooking>();
    let search = use_state(String::new);
    let approving = use_mut_ref(HashSet::<i64>::new);
    let canceling = use_mut_ref(HashSet::<i64>::new);
    let redraw = use_force_update();

    let page_size = CONFIG.page_config.default_page_size;

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            list.load(0, manager_api::get_pending_bookings(0, page_size));
        });
    }

    let refresh = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            list.load(0, manager_api::get_pending_bookings(0, page_size));
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_approve = {
        let list = list.clone();
        let approving = approving.clone();
        let redraw = redraw.clone();

        Callback::from(move |id: i64| {
            if !approving.borrow_mut().insert(id) {
                return;
            }
            redraw.force_update();

            let list = list.clone();
            let approving = approving.clone();
            let redraw = redraw.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match manager_api::approve_booking(id).await {
                    Ok(()) => list.remove_row(move |b: &PendingBooking| b.id == id),
                    Err(message) => {
                        let shown = if message.is_empty() {
                            "Failed to approve booking".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                }
                approving.borrow_mut().remove(&id);
                redraw.force_update();
            });
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

            let list = list.clone();
            let canceling = canceling.clone();
            let redraw = redraw.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match manager_api::cancel_booking(id).await {
                    Ok(()) => list.remove_row(move |b: &PendingBooking| b.id == id),
                    Err(message) => {
                        let shown = if message.is_empty() {
                            "Failed to cancel booking".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                }
                canceling.borrow_mut().remove(&id);
                redraw.force_update();
            });
        })
    };

    let state = list.snapshot();
    let query = search.to_lowercase();
    let filtered: Vec<PendingBooking> = state
        .items()
        .iter()
        .filter(|b| {
            b.reference.to_lowercase().contains(&query)
                || b.service_name.to_lowercase().contains(&query)
                || b.user.name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    html! {
        <div class="screen pending-bookings">
            <div class="screen-heading split">
                <div>
                    <span class="section-tag">{"⏱️ Operations"}</span>
                    <h2>{"Pending Approvals"}</h2>
                    <p>{"Review and manually confirm incoming ground reservations to finalize scheduling."}</p>
                </div>
                <div class="stat-card">
                    <p class="field-label">{"Awaiting Action"}</p>
                    <div class="stat-row">
                        <h3>{state.items().len()}</h3>
                        <span class="stat-pill">{"Bookings"}</span>
                    </div>
                </div>
            </div>

            <div class="control-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Filter by reference, service or user..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <button class="btn-ghost" onclick={refresh} disabled={state.is_loading()}>
                    {"Refresh"}
                </button>
            </div>

            if state.is_loading() && state.items().is_empty() {
                <div class="screen-loading">
                    <div class="spinner"></div>
                    <p class="loading-title">{"Synchronizing Bookings"}</p>
                    <p class="loading-sub">{"Fetching latest reservation data from the engine..."}</p>
                </div>
            } else if let Some(message) = state.error() {
                <div class="screen-error">
                    <h3>{"Sync Interrupted"}</h3>
                    <p>{message.to_string()}</p>
                    <button class="btn-danger" onclick={{
                        let list = list.clone();
                        Callback::from(move |_: MouseEvent| {
                            list.load(0, manager_api::get_pending_bookings(0, page_size));
                        })
                    }}>
                        {"Retry Connection"}
                    </button>
                </div>
            } else if filtered.is_empty() {
                <div class="screen-empty">
                    <p class="empty-title">{"Queue Clear"}</p>
                    <p class="empty-sub">{"No pending approvals found"}</p>
                </div>
            } else {
                <div class="booking-cards">
                    { for filtered.iter().map(|booking| {
                        let id = booking.id;
                        let is_approving = approving.borrow().contains(&id);
                        let is_canceling = canceling.borrow().contains(&id);
                        let row_busy = is_approving || is_canceling;

                        html! {
                            <div class="booking-card" key={id}>
                                <div class="booking-main">
                                    <span class="ref-chip">{booking.reference.clone()}</span>
                                    <span class="ref-label">{"Ref Code"}</span>
                                    <h3>{booking.service_name.clone()}</h3>
                                    <p class="resource-line">{booking.resource_name.clone()}</p>
                                </div>

                                <div class="booking-timing">
                                    <div>
                                        <p class="field-label">{"Booking Date"}</p>
                                        <p class="field-value">{format_short_date(&booking.booking_date)}</p>
                                    </div>
                                    <div>
                                        <p class="field-label">{"Time Slot"}</p>
                                        <p class="field-value">{format!("{} - {}", booking.start_time, booking.end_time)}</p>
                                    </div>
                                </div>

                                <div class="booking-customer">
                                    <p class="customer-name">{booking.user.name.clone()}</p>
                                    <p class="customer-tag">{"Verified Client"}</p>
                                </div>

                                <div class="booking-actions">
                                    <div class="amount-block">
                                        <p class="field-label">{"Total Amount"}</p>
                                        <h4>{format!("₹{}", booking.amount)}</h4>
                                    </div>
                                    <button
                                        class="btn-primary"
                                        disabled={row_busy}
                                        onclick={on_approve.reform(move |_| id)}
                                    >
                                        if is_approving { <span class="btn-spinner"></span> }
                                        {"Approve"}
                                    </button>
                                    <button
                                        class="btn-danger ghost"
                                        disabled={row_busy}
                                        onclick={on_cancel.reform(move |_| id)}
                                    >
                                        if is_canceling { <span class="btn-spinner"></span> }
                                        {"Cancel"}
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
