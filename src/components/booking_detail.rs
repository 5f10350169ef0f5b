// ============================================================================
// BOOKING DETAIL - FICHA LATERAL DE UNA RESERVA
// ============================================================================
// Carga la reserva por id al montarse y muestra horario, recurso, cliente
// y desglose financiero. Reintentable si la carga falla.
// ============================================================================

use yew::prelude::*;

use crate::models::BookingRecord;
use crate::services::manager_api;
use crate::utils::dates::format_long_date;

#[derive(Properties, PartialEq)]
pub struct BookingDetailProps {
    pub booking_id: i64,
    pub on_close: Callback<()>,
}

#[function_component(BookingDetail)]
pub fn booking_detail(props: &BookingDetailProps) -> Html {
    let booking = use_state(|| None::<BookingRecord>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let attempt = use_state(|| 0u32);

    {
        let booking = booking.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((props.booking_id, *attempt), move |(booking_id, _)| {
            let booking_id = *booking_id;
            booking.set(None);
            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match manager_api::get_booking_by_id(booking_id).await {
                    Ok(record) => booking.set(Some(record)),
                    Err(message) => {
                        let shown = if message.is_empty() {
                            "Failed to load reservation details".to_string()
                        } else {
                            message
                        };
                        error.set(Some(shown));
                    }
                }
                loading.set(false);
            });
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    let title = if *loading {
        "Loading Details...".to_string()
    } else {
        booking
            .as_ref()
            .map(|b| b.service_name.clone())
            .unwrap_or_else(|| "Reservation Details".to_string())
    };
    let reference = booking
        .as_ref()
        .map(|b| b.reference.clone())
        .unwrap_or_else(|| "---".to_string());

    html! {
        <div class="sheet-backdrop" onclick={props.on_close.reform(|_| ())}>
            <aside class="booking-sheet" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="sheet-header">
                    <div class="sheet-badges">
                        <span class="sheet-tag">{"Reservation Log"}</span>
                        if let Some(record) = booking.as_ref() {
                            <span class={classes!("status-chip", record.status.css_class())}>
                                {record.status.label()}
                            </span>
                        }
                    </div>
                    <h2>{title}</h2>
                    <p class="sheet-ref">{format!("Ref: {}", reference)}</p>
                    <button class="sheet-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
                </header>

                <div class="sheet-body">
                    if *loading {
                        <div class="sheet-loading">
                            <div class="spinner"></div>
                            <p>{"Accessing Global DB..."}</p>
                        </div>
                    } else if let Some(message) = (*error).clone() {
                        <div class="sheet-error">
                            <p>{message}</p>
                            <button class="btn-secondary" onclick={retry}>{"Retry"}</button>
                        </div>
                    } else if let Some(record) = booking.as_ref() {
                        <div class="sheet-sections">
                            <section class="timing-grid">
                                <div>
                                    <p class="field-label">{"Reservation Date"}</p>
                                    <p class="field-value">{format_long_date(&record.booking_date)}</p>
                                </div>
                                <div>
                                    <p class="field-label">{"Time Slot"}</p>
                                    <p class="field-value">{format!("{} - {}", record.start_time, record.end_time)}</p>
                                </div>
                            </section>

                            <section class="allocation">
                                <p class="field-label">{"Asset Allocation"}</p>
                                <h4>{record.resource_name.clone()}</h4>
                                <p class="field-sub">{record.service_name.clone()}</p>
                            </section>

                            <section class="customer">
                                <p class="field-label">{"Customer Profile"}</p>
                                <h4>{record.user.name.clone()}</h4>
                                if let Some(email) = record.user.email.clone() {
                                    <p class="field-sub">{email}</p>
                                }
                            </section>

                            <section class="financials">
                                <p class="field-label">{"Financial Breakdown"}</p>
                                <div class="financial-card">
                                    <div class="financial-row">
                                        <span>{"Base Fare (Slot Subtotal)"}</span>
                                        <span>{format!("₹{}", record.amount_breakdown.slot_subtotal)}</span>
                                    </div>
                                    <div class="financial-row">
                                        <span>{format!("Platform Access Fee ({}%)", record.amount_breakdown.platform_fee_percent)}</span>
                                        <span>{format!("₹{}", record.amount_breakdown.platform_fee)}</span>
                                    </div>
                                    <div class="financial-row total">
                                        <span>{"Total Settlement"}</span>
                                        <span>{format!("₹{}", record.amount_breakdown.total_amount)}</span>
                                    </div>
                                </div>
                            </section>

                            <section class="aux-grid">
                                <div class="aux-card">
                                    <p class="field-label">{"Booking Type"}</p>
                                    <p class="field-value">
                                        {record.booking_type.clone().unwrap_or_else(|| "STANDARD".to_string())}
                                    </p>
                                </div>
                                <div class="aux-card">
                                    <p class="field-label">{"Internal Note"}</p>
                                    <p class="field-note">
                                        {record.message.clone().unwrap_or_else(|| "No remarks provided".to_string())}
                                    </p>
                                </div>
                            </section>
                        </div>
                    }
                </div>
            </aside>
        </div>
    }
}
