// ============================================================================
// RESOURCE DETAIL - OPERACIONES DE UN RECURSO
// ============================================================================
// Cuatro paneles sobre el mismo recurso: reservas confirmadas del día,
// rejilla de disponibilidad, reglas de precio y configuración de slots.
// Cambiar la fecha o guardar cualquier cambio recarga el bloque entero.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{
    DayType, NewPriceRule, PriceRule, PriceRuleUpdate, ResourceBooking, ResourceConfig,
    ResourceSlot, SlotConfigUpdate, SlotStatus,
};
use crate::services::manager_api;
use crate::utils::dates::{format_short_date, shift_date, today};

const DAY_TYPES: &[(DayType, &str)] = &[
    (DayType::All, "Apply to All Days"),
    (DayType::Weekday, "Weekdays Only"),
    (DayType::Weekend, "Weekends Only"),
    (DayType::Holiday, "Holidays Only"),
];

/// Medias horas del día en formato wire ("HH:MM:00")
fn time_options() -> Vec<String> {
    (0..48)
        .map(|i| format!("{:02}:{}:00", i / 2, if i % 2 == 0 { "00" } else { "30" }))
        .collect()
}

/// "HH:MM:SS" → "HH:MM" para pintar
fn short_time(raw: &str) -> &str {
    raw.get(..5).unwrap_or(raw)
}

#[derive(Clone, Copy, PartialEq)]
enum Panel {
    Bookings,
    Slots,
    Rules,
    Config,
}

impl Panel {
    fn label(&self) -> &'static str {
        match self {
            Panel::Bookings => "Confirmed Bookings",
            Panel::Slots => "Availability Grid",
            Panel::Rules => "Price Rules",
            Panel::Config => "Configuration",
        }
    }
}

const PANELS: &[Panel] = &[Panel::Bookings, Panel::Slots, Panel::Rules, Panel::Config];

/// Todo lo que pinta la pantalla, cargado de una vez
#[derive(Clone, PartialEq)]
struct OpsData {
    bookings: Vec<ResourceBooking>,
    slots: Vec<ResourceSlot>,
    rules: Vec<PriceRule>,
    config: ResourceConfig,
}

#[derive(Clone, PartialEq)]
enum RuleDialog {
    Closed,
    Create,
    Edit(PriceRule),
}

#[derive(Properties, PartialEq)]
pub struct ResourceDetailProps {
    pub resource_id: i64,
    pub on_back: Callback<()>,
}

#[function_component(ResourceDetail)]
pub fn resource_detail(props: &ResourceDetailProps) -> Html {
    let date = use_state(today);
    let panel = use_state(|| Panel::Bookings);
    let data = use_state(|| None::<Result<OpsData, String>>);
    // Incrementar fuerza la recarga del bloque tras guardar algo
    let refresh_tick = use_state(|| 0u32);

    let rule_dialog = use_state(|| RuleDialog::Closed);
    let config_open = use_state(|| false);
    let saving = use_state(|| false);

    let resource_id = props.resource_id;

    {
        let data = data.clone();
        use_effect_with(
            (resource_id, (*date).clone(), *refresh_tick),
            move |(resource_id, date, _)| {
                let resource_id = *resource_id;
                let date = date.clone();
                data.set(None);
                spawn_local(async move {
                    let outcome = load_ops_data(resource_id, &date).await;
                    data.set(Some(outcome));
                });
            },
        );
    }

    let refresh = {
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |_: ()| refresh_tick.set(*refresh_tick + 1))
    };

    let prev_day = {
        let date = date.clone();
        Callback::from(move |_: MouseEvent| date.set(shift_date(&date, -1)))
    };

    let next_day = {
        let date = date.clone();
        Callback::from(move |_: MouseEvent| date.set(shift_date(&date, 1)))
    };

    let on_delete_rule = {
        let refresh = refresh.clone();
        let saving = saving.clone();
        Callback::from(move |rule_id: i64| {
            let confirmed = web_sys::window()
                .unwrap()
                .confirm_with_message("Are you sure you want to delete this price rule?")
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            saving.set(true);
            let refresh = refresh.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match manager_api::delete_price_rule(rule_id).await {
                    Ok(()) => {
                        saving.set(false);
                        refresh.emit(());
                    }
                    Err(message) => {
                        saving.set(false);
                        let shown = if message.is_empty() {
                            "Failed to delete price rule".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                }
            });
        })
    };

    let on_save_rule = {
        let rule_dialog = rule_dialog.clone();
        let refresh = refresh.clone();
        let saving = saving.clone();

        Callback::from(move |form: RuleForm| {
            saving.set(true);
            let mode = (*rule_dialog).clone();
            let rule_dialog = rule_dialog.clone();
            let refresh = refresh.clone();
            let saving = saving.clone();

            spawn_local(async move {
                let outcome = match mode {
                    RuleDialog::Create => {
                        let payload = NewPriceRule {
                            resource_id,
                            day_type: form.day_type,
                            start_time: form.start_time,
                            end_time: form.end_time,
                            // Cero significa "sin override": no se manda
                            base_price: (form.base_price != 0.0).then_some(form.base_price),
                            extra_charge: form.extra_charge,
                            reason: form.reason,
                            priority: form.priority,
                        };
                        manager_api::add_price_rule(&payload).await.map(|_| ())
                    }
                    RuleDialog::Edit(rule) => {
                        let payload = PriceRuleUpdate {
                            day_type: form.day_type,
                            start_time: form.start_time,
                            end_time: form.end_time,
                            base_price: (form.base_price != 0.0).then_some(form.base_price),
                            extra_charge: form.extra_charge,
                            reason: form.reason,
                            priority: form.priority,
                            enabled: rule.enabled,
                        };
                        manager_api::update_price_rule(rule.id, &payload).await.map(|_| ())
                    }
                    RuleDialog::Closed => Ok(()),
                };

                saving.set(false);
                match outcome {
                    Ok(()) => {
                        rule_dialog.set(RuleDialog::Closed);
                        refresh.emit(());
                    }
                    Err(message) => {
                        let shown = if message.is_empty() {
                            "Failed to save price rule".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                }
            });
        })
    };

    let on_save_config = {
        let config_open = config_open.clone();
        let refresh = refresh.clone();
        let saving = saving.clone();

        Callback::from(move |payload: SlotConfigUpdate| {
            saving.set(true);
            let config_open = config_open.clone();
            let refresh = refresh.clone();
            let saving = saving.clone();

            spawn_local(async move {
                match manager_api::update_resource_config(&payload).await {
                    Ok(_) => {
                        saving.set(false);
                        config_open.set(false);
                        refresh.emit(());
                    }
                    Err(message) => {
                        saving.set(false);
                        let shown = if message.is_empty() {
                            "Failed to update configuration".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                }
            });
        })
    };

    let body = match &*data {
        None => html! {
            <div class="screen-loading">
                <div class="spinner"></div>
                <p class="loading-title">{"Synchronizing Ops Data"}</p>
                <p class="loading-sub">{"Interrogating booking engine..."}</p>
            </div>
        },
        Some(Err(message)) => {
            let retry = refresh.reform(|_: MouseEvent| ());
            html! {
                <div class="screen-error">
                    <h3>{"Could not load resource data"}</h3>
                    <p>{message.clone()}</p>
                    <button class="btn-danger" onclick={retry}>{"Retry Connection"}</button>
                </div>
            }
        }
        Some(Ok(ops)) => match *panel {
            Panel::Bookings => bookings_panel(&ops.bookings),
            Panel::Slots => slots_panel(&ops.slots),
            Panel::Rules => rules_panel(&ops.rules, &rule_dialog, &on_delete_rule, *saving),
            Panel::Config => config_panel(&ops.config, &config_open),
        },
    };

    html! {
        <div class="screen resource-detail">
            <div class="screen-heading split">
                <div>
                    <button class="btn-ghost" onclick={props.on_back.reform(|_| ())}>
                        {"← Back to services"}
                    </button>
                    <h2>{"Resource Operations"}</h2>
                    <p>{format!("Monitoring and availability for resource #{}", resource_id)}</p>
                </div>
                <div class="date-controller">
                    <button class="btn-outline" onclick={prev_day}>{"‹"}</button>
                    <div class="date-display">
                        <p class="field-label">{"Operations Date"}</p>
                        <p class="date-value">{format_short_date(&date)}</p>
                    </div>
                    <button class="btn-outline" onclick={next_day}>{"›"}</button>
                </div>
            </div>

            <div class="panel-tabs">
                { for PANELS.iter().map(|p| {
                    let p = *p;
                    let active = *panel == p;
                    let panel = panel.clone();
                    html! {
                        <button
                            class={classes!("panel-tab", active.then_some("active"))}
                            onclick={Callback::from(move |_| panel.set(p))}
                        >
                            {p.label()}
                        </button>
                    }
                }) }
            </div>

            { body }

            {
                match (*rule_dialog).clone() {
                    RuleDialog::Closed => html! {},
                    RuleDialog::Create => html! {
                        <PriceRuleDialog
                            initial={None::<PriceRule>}
                            busy={*saving}
                            on_save={on_save_rule.clone()}
                            on_cancel={{
                                let rule_dialog = rule_dialog.clone();
                                Callback::from(move |_| rule_dialog.set(RuleDialog::Closed))
                            }}
                        />
                    },
                    RuleDialog::Edit(rule) => html! {
                        <PriceRuleDialog
                            initial={Some(rule)}
                            busy={*saving}
                            on_save={on_save_rule.clone()}
                            on_cancel={{
                                let rule_dialog = rule_dialog.clone();
                                Callback::from(move |_| rule_dialog.set(RuleDialog::Closed))
                            }}
                        />
                    },
                }
            }

            if *config_open {
                if let Some(Ok(ops)) = &*data {
                    <ConfigDialog
                        config={ops.config.clone()}
                        busy={*saving}
                        on_save={on_save_config.clone()}
                        on_cancel={{
                            let config_open = config_open.clone();
                            Callback::from(move |_| config_open.set(false))
                        }}
                    />
                }
            }
        </div>
    }
}

/// Las cuatro peticiones del bloque; la primera que falle tumba la carga
async fn load_ops_data(resource_id: i64, date: &str) -> Result<OpsData, String> {
    let bookings = manager_api::get_resource_bookings(resource_id, date).await?;
    let slots = manager_api::get_resource_slots(resource_id, date).await?;
    let rules = manager_api::get_price_rules(resource_id).await?;
    let config = manager_api::get_resource_config(resource_id).await?;
    Ok(OpsData {
        bookings,
        slots,
        rules,
        config,
    })
}

fn bookings_panel(bookings: &[ResourceBooking]) -> Html {
    if bookings.is_empty() {
        return html! {
            <div class="screen-empty">
                <p class="empty-title">{"No bookings for this date"}</p>
            </div>
        };
    }

    html! {
        <div class="booking-cards">
            { for bookings.iter().map(|booking| html! {
                <div class="ledger-card compact" key={booking.id}>
                    <div class="ledger-identity">
                        <h3>{format!("{} - {}", short_time(&booking.start_time), short_time(&booking.end_time))}</h3>
                        <span class="ref-chip muted">{booking.reference.clone()}</span>
                    </div>
                    <div>
                        <p class="field-label">{"Client Info"}</p>
                        <p class="field-value">{booking.user.name.clone()}</p>
                    </div>
                    <span class={classes!("status-chip", booking.status.css_class())}>
                        {booking.status.label()}
                    </span>
                </div>
            }) }
        </div>
    }
}

fn slots_panel(slots: &[ResourceSlot]) -> Html {
    if slots.is_empty() {
        return html! {
            <div class="screen-empty">
                <p class="empty-title">{"No slots generated for this date"}</p>
            </div>
        };
    }

    html! {
        <div class="slot-grid">
            { for slots.iter().map(|slot| {
                let available = slot.status == SlotStatus::Available;
                html! {
                    <div
                        class={classes!("slot-card", if available { "available" } else { "taken" })}
                        key={slot.slot_id.clone()}
                    >
                        <div class="slot-head">
                            <span class={classes!("slot-dot", available.then_some("live"))}></span>
                            <span class="field-label">{slot.status.as_str()}</span>
                        </div>
                        <h4>{short_time(&slot.start_time).to_string()}</h4>
                        <p class="cell-sub">{format!("Ends {}", short_time(&slot.end_time))}</p>
                        <p class="slot-price">{format!("₹{}", slot.price)}</p>
                    </div>
                }
            }) }
        </div>
    }
}

fn rules_panel(
    rules: &[PriceRule],
    dialog: &UseStateHandle<RuleDialog>,
    on_delete: &Callback<i64>,
    busy: bool,
) -> Html {
    let open_create = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(RuleDialog::Create))
    };

    html! {
        <div class="rules-block">
            <div class="section-head">
                <div>
                    <h3>{"Active Price Rules"}</h3>
                    <p class="cell-sub">{"Override standard pricing based on time and day"}</p>
                </div>
                <button class="btn-primary" onclick={open_create}>{"＋ New Price Rule"}</button>
            </div>

            if rules.is_empty() {
                <div class="screen-empty">
                    <p class="empty-title">{"No active price rules found"}</p>
                </div>
            } else {
                <div class="rule-rows">
                    { for rules.iter().map(|rule| {
                        let rule_id = rule.id;
                        let edit = {
                            let dialog = dialog.clone();
                            let rule = rule.clone();
                            Callback::from(move |_: MouseEvent| dialog.set(RuleDialog::Edit(rule.clone())))
                        };
                        html! {
                            <div class="rule-row" key={rule_id}>
                                <div>
                                    <div class="chip-row">
                                        <p class="cell-primary">
                                            { if rule.reason.is_empty() { "Unnamed Rule".to_string() } else { rule.reason.clone() } }
                                        </p>
                                        <span class="stat-pill outline">{format!("Priority {}", rule.priority)}</span>
                                    </div>
                                    <div class="chip-row">
                                        <span class="day-chip">{rule.day_type.as_str()}</span>
                                        <span class="cell-sub">
                                            {format!("{} - {}", short_time(&rule.start_time), short_time(&rule.end_time))}
                                        </span>
                                    </div>
                                </div>
                                <div class="rule-figures">
                                    <div>
                                        <p class="field-label">{"Base Price"}</p>
                                        <p class="cell-primary">{format!("₹{}", rule.base_price)}</p>
                                    </div>
                                    <div>
                                        <p class="field-label">{"Extra Charge"}</p>
                                        <p class="cell-primary accent">{format!("+₹{}", rule.extra_charge)}</p>
                                    </div>
                                    <span class={classes!("status-chip", if rule.enabled { "enabled" } else { "disabled" })}>
                                        { if rule.enabled { "Enabled" } else { "Disabled" } }
                                    </span>
                                </div>
                                <div class="rule-actions">
                                    <button class="btn-ghost small" onclick={edit}>{"✎"}</button>
                                    <button
                                        class="btn-danger outline small"
                                        disabled={busy}
                                        onclick={on_delete.reform(move |_| rule_id)}
                                    >
                                        {"🗑"}
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

fn config_panel(config: &ResourceConfig, config_open: &UseStateHandle<bool>) -> Html {
    let open = {
        let config_open = config_open.clone();
        Callback::from(move |_: MouseEvent| config_open.set(true))
    };

    html! {
        <div class="config-block">
            <div class="summary-cards">
                <div class="stat-card">
                    <p class="field-label">{"Resource"}</p>
                    <h4>{config.resource_name.clone()}</h4>
                    <span class={classes!("status-chip", if config.enabled { "active" } else { "offline" })}>
                        { if config.enabled { "Active" } else { "Inactive" } }
                    </span>
                </div>
                <div class="stat-card">
                    <p class="field-label">{"Operating Hours"}</p>
                    <h4>{format!("{} - {}", short_time(&config.opening_time), short_time(&config.closing_time))}</h4>
                </div>
                <div class="stat-card">
                    <p class="field-label">{"Slot Mechanics"}</p>
                    <h4>{format!("{} min • {} slots/day", config.slot_duration_minutes, config.total_slots)}</h4>
                </div>
            </div>

            <div class="price-core">
                <div>
                    <p class="field-label">{"Standard Base Price"}</p>
                    <h3>{format!("₹{}", config.base_price)}</h3>
                    <p class="cell-sub">{"per unit slot"}</p>
                </div>
                <button class="btn-primary" onclick={open}>{"Adjust Pricing Core"}</button>
            </div>
        </div>
    }
}

// ============================================================================
// Diálogo de regla de precio (alta y edición comparten formulario)
// ============================================================================

#[derive(Clone, PartialEq)]
pub struct RuleForm {
    pub day_type: DayType,
    pub start_time: String,
    pub end_time: String,
    pub base_price: f64,
    pub extra_charge: f64,
    pub reason: String,
    pub priority: i32,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self {
            day_type: DayType::All,
            start_time: "00:00:00".to_string(),
            end_time: "23:30:00".to_string(),
            base_price: 0.0,
            extra_charge: 0.0,
            reason: String::new(),
            priority: 1,
        }
    }
}

impl RuleForm {
    fn from_rule(rule: &PriceRule) -> Self {
        Self {
            day_type: rule.day_type,
            start_time: rule.start_time.clone(),
            end_time: rule.end_time.clone(),
            base_price: rule.base_price,
            extra_charge: rule.extra_charge,
            reason: rule.reason.clone(),
            priority: rule.priority,
        }
    }
}

#[derive(Properties, PartialEq)]
struct PriceRuleDialogProps {
    initial: Option<PriceRule>,
    busy: bool,
    on_save: Callback<RuleForm>,
    on_cancel: Callback<()>,
}

#[function_component(PriceRuleDialog)]
fn price_rule_dialog(props: &PriceRuleDialogProps) -> Html {
    let is_edit = props.initial.is_some();
    let form = use_state(|| {
        props
            .initial
            .as_ref()
            .map(RuleForm::from_rule)
            .unwrap_or_default()
    });

    let edit_text = |apply: fn(&mut RuleForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let edit_select = |apply: fn(&mut RuleForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, select.value());
            form.set(next);
        })
    };

    let on_priority = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.priority = input.value().parse().unwrap_or(1);
            form.set(next);
        })
    };

    let edit_amount = |apply: fn(&mut RuleForm, f64)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = input.value().parse().unwrap_or(0.0);
            let mut next = (*form).clone();
            apply(&mut next, parsed);
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*form).clone()))
    };

    let times = time_options();

    html! {
        <div class="dialog-backdrop" onclick={props.on_cancel.reform(|_| ())}>
            <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="dialog-header">
                    <h3>{ if is_edit { "Edit Price Rule" } else { "Create Price Rule" } }</h3>
                </header>

                <div class="dialog-body">
                    <div class="form-group">
                        <label for="rule-reason">{"Rule Reason"}</label>
                        <input
                            type="text"
                            id="rule-reason"
                            placeholder="e.g. Peak Hours Charge"
                            value={form.reason.clone()}
                            oninput={edit_text(|f, v| f.reason = v)}
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="rule-day">{"Day Profile"}</label>
                            <select id="rule-day" onchange={edit_select(|f, v| f.day_type = DayType::parse(&v))}>
                                { for DAY_TYPES.iter().map(|(value, label)| html! {
                                    <option value={value.as_str()} selected={form.day_type == *value}>{*label}</option>
                                }) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="rule-priority">{"Priority"}</label>
                            <input
                                type="number"
                                id="rule-priority"
                                value={form.priority.to_string()}
                                oninput={on_priority}
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="rule-start">{"Start Time"}</label>
                            <select id="rule-start" onchange={edit_select(|f, v| f.start_time = v)}>
                                { for times.iter().map(|time| html! {
                                    <option value={time.clone()} selected={form.start_time == *time}>
                                        {short_time(time).to_string()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="rule-end">{"End Time"}</label>
                            <select id="rule-end" onchange={edit_select(|f, v| f.end_time = v)}>
                                { for times.iter().map(|time| html! {
                                    <option value={time.clone()} selected={form.end_time == *time}>
                                        {short_time(time).to_string()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="rule-base">{"Base Price Override (₹)"}</label>
                            <input
                                type="number"
                                id="rule-base"
                                value={form.base_price.to_string()}
                                oninput={edit_amount(|f, v| f.base_price = v)}
                            />
                        </div>
                        <div class="form-group accent">
                            <label for="rule-extra">{"Extra Surcharge (₹)"}</label>
                            <input
                                type="number"
                                id="rule-extra"
                                value={form.extra_charge.to_string()}
                                oninput={edit_amount(|f, v| f.extra_charge = v)}
                            />
                        </div>
                    </div>
                </div>

                <footer class="dialog-footer">
                    <button type="button" class="btn-outline" onclick={props.on_cancel.reform(|_| ())}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn-primary" disabled={props.busy} onclick={save}>
                        if props.busy { <span class="btn-spinner"></span> }
                        { if is_edit { "Update Rule" } else { "Deploy Rule" } }
                    </button>
                </footer>
            </div>
        </div>
    }
}

// ============================================================================
// Diálogo de configuración de slots
// ============================================================================

#[derive(Properties, PartialEq)]
struct ConfigDialogProps {
    config: ResourceConfig,
    busy: bool,
    on_save: Callback<SlotConfigUpdate>,
    on_cancel: Callback<()>,
}

#[function_component(ConfigDialog)]
fn config_dialog(props: &ConfigDialogProps) -> Html {
    let form = use_state(|| SlotConfigUpdate {
        resource_id: props.config.resource_id,
        opening_time: props.config.opening_time.clone(),
        closing_time: props.config.closing_time.clone(),
        slot_duration_minutes: props.config.slot_duration_minutes,
        base_price: props.config.base_price,
    });

    let edit_select = |apply: fn(&mut SlotConfigUpdate, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, select.value());
            form.set(next);
        })
    };

    let on_duration = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.slot_duration_minutes = input.value().parse().unwrap_or(60);
            form.set(next);
        })
    };

    let on_price = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.base_price = input.value().parse().unwrap_or(0.0);
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*form).clone()))
    };

    let times = time_options();

    html! {
        <div class="dialog-backdrop" onclick={props.on_cancel.reform(|_| ())}>
            <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="dialog-header">
                    <h3>{"Edit Operations Config"}</h3>
                </header>

                <div class="dialog-body">
                    <div class="form-row">
                        <div class="form-group">
                            <label for="cfg-open">{"Opening Time"}</label>
                            <select id="cfg-open" onchange={edit_select(|f, v| f.opening_time = v)}>
                                { for times.iter().map(|time| html! {
                                    <option value={time.clone()} selected={form.opening_time == *time}>
                                        {short_time(time).to_string()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="cfg-close">{"Closing Time"}</label>
                            <select id="cfg-close" onchange={edit_select(|f, v| f.closing_time = v)}>
                                { for times.iter().map(|time| html! {
                                    <option value={time.clone()} selected={form.closing_time == *time}>
                                        {short_time(time).to_string()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="cfg-duration">{"Slot Duration (Min)"}</label>
                            <input
                                type="number"
                                id="cfg-duration"
                                value={form.slot_duration_minutes.to_string()}
                                oninput={on_duration}
                            />
                        </div>
                        <div class="form-group accent">
                            <label for="cfg-price">{"Base Price (₹)"}</label>
                            <input
                                type="number"
                                id="cfg-price"
                                value={form.base_price.to_string()}
                                oninput={on_price}
                            />
                        </div>
                    </div>
                </div>

                <footer class="dialog-footer">
                    <button type="button" class="btn-outline" onclick={props.on_cancel.reform(|_| ())}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn-primary" disabled={props.busy} onclick={save}>
                        if props.busy { <span class="btn-spinner"></span> }
                        {"Save Configuration"}
                    </button>
                </footer>
            </div>
        </div>
    }
}
