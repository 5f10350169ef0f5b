// ============================================================================
// ACTIVITIES - CATÁLOGO DE DEPORTES
// ============================================================================
// El endpoint devuelve la lista completa, sin paginar; se envuelve como
// página única para reutilizar el controlador de lista. El interruptor de
// cada actividad voltea en sitio y se revierte si el backend dice que no.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_list;
use crate::models::{ActivityPayload, Page, ServiceActivity};
use crate::services::manager_api;
use crate::state::MutationKind;

async fn fetch_all() -> Result<Page<ServiceActivity>, String> {
    manager_api::get_activities().await.map(Page::single)
}

#[derive(Clone, PartialEq)]
enum DialogMode {
    Closed,
    Create,
    Edit(ServiceActivity),
}

#[function_component(Activities)]
pub fn activities() -> Html {
    let list = use_list::<ServiceActivity>();
    let search = use_state(String::new);
    let dialog = use_state(|| DialogMode::Closed);
    let saving = use_state(|| false);
    let save_error = use_state(|| None::<String>);

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            list.load(0, fetch_all());
        });
    }

    let reload = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.load(0, fetch_all()))
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let open_create = {
        let dialog = dialog.clone();
        let save_error = save_error.clone();
        Callback::from(move |_: MouseEvent| {
            save_error.set(None);
            dialog.set(DialogMode::Create);
        })
    };

    let close_dialog = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(DialogMode::Closed))
    };

    let on_save = {
        let list = list.clone();
        let dialog = dialog.clone();
        let saving = saving.clone();
        let save_error = save_error.clone();

        Callback::from(move |payload: ActivityPayload| {
            saving.set(true);
            save_error.set(None);

            let after = {
                let dialog = dialog.clone();
                let saving = saving.clone();
                let save_error = save_error.clone();
                Callback::from(move |result: Result<(), String>| {
                    saving.set(false);
                    match result {
                        Ok(()) => dialog.set(DialogMode::Closed),
                        Err(message) => {
                            let shown = if message.is_empty() {
                                "Failed to save activity".to_string()
                            } else {
                                message
                            };
                            save_error.set(Some(shown));
                        }
                    }
                })
            };

            match (*dialog).clone() {
                DialogMode::Create => {
                    list.mutate(
                        MutationKind::Create,
                        async move { manager_api::create_activity(&payload).await.map(|_| ()) },
                        |_| fetch_all(),
                        after,
                    );
                }
                DialogMode::Edit(activity) => {
                    list.mutate(
                        MutationKind::Update,
                        async move {
                            manager_api::update_activity(activity.id, &payload)
                                .await
                                .map(|_| ())
                        },
                        |_| fetch_all(),
                        after,
                    );
                }
                DialogMode::Closed => {}
            }
        })
    };

    let on_delete = {
        let list = list.clone();
        Callback::from(move |activity: ServiceActivity| {
            let confirmed = web_sys::window()
                .unwrap()
                .confirm_with_message(&format!("Delete activity \"{}\"?", activity.name))
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let after = Callback::from(move |result: Result<(), String>| {
                if let Err(message) = result {
                    let shown = if message.is_empty() {
                        "Failed to delete activity".to_string()
                    } else {
                        message
                    };
                    web_sys::window().unwrap().alert_with_message(&shown).ok();
                }
            });

            list.mutate(
                MutationKind::Delete,
                manager_api::delete_activity(activity.id),
                |_| fetch_all(),
                after,
            );
        })
    };

    // Volteo optimista: la fila cambia ya; si el backend falla, se deshace
    let on_toggle = {
        let list = list.clone();
        Callback::from(move |activity: ServiceActivity| {
            let id = activity.id;
            let request = async move {
                if activity.enabled {
                    manager_api::disable_activity(id).await
                } else {
                    manager_api::enable_activity(id).await
                }
            };
            list.toggle(
                move |a: &ServiceActivity| a.id == id,
                |a| a.enabled = !a.enabled,
                request,
            );
        })
    };

    let state = list.snapshot();
    let query = search.to_lowercase();
    let filtered: Vec<ServiceActivity> = state
        .items()
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&query) || a.code.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    html! {
        <div class="screen activities">
            <div class="screen-heading split">
                <div>
                    <span class="section-tag">{"🎯 Catalogue"}</span>
                    <h2>{"Activities"}</h2>
                    <p>{"Sports and activity codes available across all services."}</p>
                </div>
                <div class="heading-actions">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search by name or code..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <button class="btn-primary" onclick={open_create}>{"＋ New Activity"}</button>
                </div>
            </div>

            if state.is_loading() && state.items().is_empty() {
                <div class="screen-loading">
                    <div class="spinner"></div>
                    <p class="loading-title">{"Loading Catalogue"}</p>
                </div>
            } else if let Some(message) = state.error() {
                <div class="screen-error">
                    <h3>{"Could not load activities"}</h3>
                    <p>{message.to_string()}</p>
                    <button class="btn-danger" onclick={reload}>{"Retry"}</button>
                </div>
            } else if filtered.is_empty() {
                <div class="screen-empty">
                    <p class="empty-title">{"No activities found"}</p>
                </div>
            } else {
                <div class="activity-cards">
                    { for filtered.iter().map(|activity| {
                        let toggle = {
                            let activity = activity.clone();
                            on_toggle.reform(move |_: MouseEvent| activity.clone())
                        };
                        let edit = {
                            let dialog = dialog.clone();
                            let save_error = save_error.clone();
                            let activity = activity.clone();
                            Callback::from(move |_: MouseEvent| {
                                save_error.set(None);
                                dialog.set(DialogMode::Edit(activity.clone()));
                            })
                        };
                        let delete = {
                            let activity = activity.clone();
                            on_delete.reform(move |_: MouseEvent| activity.clone())
                        };

                        html! {
                            <div class="activity-card" key={activity.id}>
                                <div class="activity-card-head">
                                    <span class="code-chip mono">{activity.code.clone()}</span>
                                    <button
                                        class={classes!("toggle-pill", activity.enabled.then_some("on"))}
                                        onclick={toggle}
                                        title={ if activity.enabled { "Disable" } else { "Enable" } }
                                    >
                                        <span class="toggle-knob"></span>
                                    </button>
                                </div>
                                <h3>{activity.name.clone()}</h3>
                                <p class={classes!("cell-sub", (!activity.enabled).then_some("muted"))}>
                                    { if activity.enabled { "Visible to customers" } else { "Hidden from customers" } }
                                </p>
                                <div class="activity-card-foot">
                                    <button class="btn-ghost small" onclick={edit}>{"Edit"}</button>
                                    <button class="btn-danger outline small" onclick={delete}>{"Delete"}</button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }

            {
                match (*dialog).clone() {
                    DialogMode::Closed => html! {},
                    DialogMode::Create => html! {
                        <ActivityDialog
                            initial={None::<ServiceActivity>}
                            busy={*saving}
                            error={(*save_error).clone()}
                            on_save={on_save.clone()}
                            on_cancel={close_dialog.clone()}
                        />
                    },
                    DialogMode::Edit(activity) => html! {
                        <ActivityDialog
                            initial={Some(activity)}
                            busy={*saving}
                            error={(*save_error).clone()}
                            on_save={on_save.clone()}
                            on_cancel={close_dialog.clone()}
                        />
                    },
                }
            }
        </div>
    }
}

// ============================================================================
// Diálogo de alta/edición: código y nombre, nada más
// ============================================================================

#[derive(Properties, PartialEq)]
struct ActivityDialogProps {
    initial: Option<ServiceActivity>,
    busy: bool,
    error: Option<String>,
    on_save: Callback<ActivityPayload>,
    on_cancel: Callback<()>,
}

#[function_component(ActivityDialog)]
fn activity_dialog(props: &ActivityDialogProps) -> Html {
    let is_edit = props.initial.is_some();
    let code = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.code.clone())
            .unwrap_or_default()
    });
    let name = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default()
    });

    let on_code = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // El backend guarda códigos en mayúsculas con guiones bajos
            code.set(input.value().to_uppercase().replace(' ', "_"));
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let save = {
        let code = code.clone();
        let name = name.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            on_save.emit(ActivityPayload {
                code: (*code).clone(),
                name: (*name).clone(),
            });
        })
    };

    let incomplete = code.is_empty() || name.is_empty();

    html! {
        <div class="dialog-backdrop" onclick={props.on_cancel.reform(|_| ())}>
            <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="dialog-header">
                    <h3>{ if is_edit { "Edit Activity" } else { "Create Activity" } }</h3>
                </header>

                <div class="dialog-body">
                    if let Some(message) = props.error.clone() {
                        <div class="inline-error"><p>{message}</p></div>
                    }
                    <div class="form-group">
                        <label for="act-code">{"Activity Code"}</label>
                        <input
                            type="text"
                            id="act-code"
                            placeholder="e.g. PICKLEBALL"
                            value={(*code).clone()}
                            disabled={is_edit}
                            oninput={on_code}
                        />
                    </div>
                    <div class="form-group">
                        <label for="act-name">{"Display Name"}</label>
                        <input
                            type="text"
                            id="act-name"
                            placeholder="e.g. Pickleball"
                            value={(*name).clone()}
                            oninput={on_name}
                        />
                    </div>
                </div>

                <footer class="dialog-footer">
                    <button type="button" class="btn-outline" onclick={props.on_cancel.reform(|_| ())}>
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        class="btn-primary"
                        disabled={props.busy || incomplete}
                        onclick={save}
                    >
                        if props.busy { <span class="btn-spinner"></span> }
                        { if is_edit { "Save Changes" } else { "Create Activity" } }
                    </button>
                </footer>
            </div>
        </div>
    }
}
