// ============================================================================
// USER MANAGEMENT - DIRECTORIO DE USUARIOS FINALES
// ============================================================================
// Tabla paginada con búsqueda local por nombre. El historial de reservas de
// cada usuario se abre en un panel lateral que anexa páginas con "load more".
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::booking_detail::BookingDetail;
use crate::config::CONFIG;
use crate::hooks::use_list;
use crate::models::{AppUser, BookingRecord};
use crate::services::manager_api;
use crate::utils::dates::{format_numeric_date, format_short_date};

#[function_component(UserManagement)]
pub fn user_management() -> Html {
    let list = use_list::<AppUser>();
    let search = use_state(String::new);
    let selected_user = use_state(|| None::<AppUser>);

    let page_size = CONFIG.page_config.default_page_size;

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            list.load(0, manager_api::get_users(0, page_size));
        });
    }

    let go_to = {
        let list = list.clone();
        Callback::from(move |page: u32| {
            list.load(page, manager_api::get_users(page, page_size));
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let state = list.snapshot();
    let query = search.to_lowercase();
    let filtered: Vec<AppUser> = state
        .items()
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    let page = state.page();
    let total_pages = state.total_pages();
    let prev_disabled = state.is_loading() || page == 0;
    let next_disabled = state.is_loading() || page + 1 >= total_pages;

    html! {
        <div class="screen user-management">
            <div class="screen-heading split">
                <div>
                    <span class="section-tag">{"👥 Directory"}</span>
                    <h2>{"User & Wallet"}</h2>
                    <p>{"Registered customers with their booking track record."}</p>
                </div>
                <div class="stat-card square">
                    <p class="field-label">{"Total Users"}</p>
                    <div class="stat-row">
                        <h3>{state.total_elements()}</h3>
                        <span class="stat-pill outline">{"REGISTERED"}</span>
                    </div>
                </div>
            </div>

            <div class="control-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search users by name..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>

            if state.is_loading() && state.items().is_empty() {
                <div class="screen-loading">
                    <div class="spinner"></div>
                    <p class="loading-title">{"Loading Users"}</p>
                </div>
            } else if let Some(message) = state.error() {
                <div class="screen-error">
                    <h3>{"Could not load users"}</h3>
                    <p>{message.to_string()}</p>
                    <button class="btn-danger" onclick={go_to.reform(move |_| page)}>{"Retry"}</button>
                </div>
            } else if filtered.is_empty() {
                <div class="screen-empty">
                    <p class="empty-title">{"No users found"}</p>
                    <p class="empty-sub">{"Try a different name"}</p>
                </div>
            } else {
                <div class="data-table">
                    <div class="table-head user-columns">
                        <span>{"User"}</span>
                        <span>{"Contact"}</span>
                        <span>{"Joined"}</span>
                        <span>{"Bookings"}</span>
                        <span>{"Status"}</span>
                        <span></span>
                    </div>
                    { for filtered.iter().map(|user| {
                        let initial = user
                            .name
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().to_string())
                            .unwrap_or_default();
                        let open_history = {
                            let selected_user = selected_user.clone();
                            let user = user.clone();
                            Callback::from(move |_: MouseEvent| selected_user.set(Some(user.clone())))
                        };

                        html! {
                            <div class="table-row user-columns" key={user.id}>
                                <div class="cell-identity">
                                    <div class="user-avatar small">{initial}</div>
                                    <div>
                                        <p class="cell-primary">{user.name.clone()}</p>
                                        <p class="cell-sub mono">{format!("ID: {}", user.id)}</p>
                                    </div>
                                </div>
                                <div>
                                    <p class="cell-primary">{user.phone.clone()}</p>
                                    <p class="cell-sub">{user.email.clone()}</p>
                                </div>
                                <p class="cell-primary">{format_numeric_date(&user.created_at)}</p>
                                <div class="booking-counts">
                                    <span class="count-chip total">{user.total_bookings}</span>
                                    <span class="count-chip ok">{user.confirmed_bookings}</span>
                                    <span class="count-chip bad">{user.cancelled_bookings}</span>
                                </div>
                                <span class={classes!("status-chip", if user.enabled { "active" } else { "offline" })}>
                                    { if user.enabled { "Active" } else { "Disabled" } }
                                </span>
                                <button class="btn-ghost" onclick={open_history}>{"History"}</button>
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

            if let Some(user) = (*selected_user).clone() {
                <UserHistorySheet
                    {user}
                    on_close={{
                        let selected_user = selected_user.clone();
                        Callback::from(move |_| selected_user.set(None))
                    }}
                />
            }
        </div>
    }
}

// ============================================================================
// Panel lateral de historial: paginado por anexado, no por reemplazo
// ============================================================================

#[derive(Properties, PartialEq)]
struct UserHistorySheetProps {
    user: AppUser,
    on_close: Callback<()>,
}

#[function_component(UserHistorySheet)]
fn user_history_sheet(props: &UserHistorySheetProps) -> Html {
    let history = use_list::<BookingRecord>();
    let selected_booking = use_state(|| None::<i64>);

    let page_size = CONFIG.page_config.history_page_size;
    let user_id = props.user.id;

    {
        let history = history.clone();
        use_effect_with(user_id, move |&user_id| {
            history.reset();
            history.load(0, manager_api::get_user_bookings(user_id, 0, page_size));
        });
    }

    let load_more = {
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            history.load_more(move |page| manager_api::get_user_bookings(user_id, page, page_size));
        })
    };

    let retry = {
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            history.load(0, manager_api::get_user_bookings(user_id, 0, page_size));
        })
    };

    let state = history.snapshot();

    html! {
        <div class="sheet-backdrop" onclick={props.on_close.reform(|_| ())}>
            <aside class="side-sheet" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="sheet-header">
                    <div>
                        <h3>{format!("{}'s Bookings", props.user.name)}</h3>
                        <p class="sheet-sub">{format!("{} total reservations", state.total_elements())}</p>
                    </div>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
                </header>

                <div class="sheet-body">
                    if state.is_loading() && state.items().is_empty() {
                        <div class="screen-loading">
                            <div class="spinner"></div>
                            <p class="loading-title">{"Fetching history"}</p>
                        </div>
                    } else if state.is_empty_success() {
                        <div class="screen-empty">
                            <p class="empty-title">{"No bookings yet"}</p>
                        </div>
                    } else {
                        <>
                            if let Some(message) = state.error() {
                                <div class="inline-error">
                                    <p>{message.to_string()}</p>
                                    <button class="btn-ghost" onclick={retry}>{"Retry"}</button>
                                </div>
                            }
                            <div class="history-rows">
                                { for state.items().iter().map(|booking| {
                                    let id = booking.id;
                                    let open = {
                                        let selected_booking = selected_booking.clone();
                                        Callback::from(move |_: MouseEvent| selected_booking.set(Some(id)))
                                    };
                                    html! {
                                        <div class="history-row" key={id} onclick={open}>
                                            <div>
                                                <p class="cell-primary">{booking.service_name.clone()}</p>
                                                <p class="cell-sub">
                                                    {format!(
                                                        "{} • {} - {}",
                                                        format_short_date(&booking.booking_date),
                                                        booking.start_time,
                                                        booking.end_time
                                                    )}
                                                </p>
                                            </div>
                                            <div class="text-right">
                                                <span class={classes!("status-chip", booking.status.css_class())}>
                                                    {booking.status.label()}
                                                </span>
                                                <p class="cell-primary">
                                                    {format!("₹{}", booking.amount_breakdown.total_amount)}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                            if state.has_more() {
                                <button
                                    class="btn-outline wide"
                                    disabled={state.is_loading_more()}
                                    onclick={load_more}
                                >
                                    if state.is_loading_more() { <span class="btn-spinner"></span> }
                                    {"Load More"}
                                </button>
                            }
                        </>
                    }
                </div>
            </aside>

            if let Some(booking_id) = *selected_booking {
                <BookingDetail
                    {booking_id}
                    on_close={{
                        let selected_booking = selected_booking.clone();
                        Callback::from(move |_| selected_booking.set(None))
                    }}
                />
            }
        </div>
    }
}
