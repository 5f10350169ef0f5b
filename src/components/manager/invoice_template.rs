// ============================================================================
// INVOICE TEMPLATE - PLANTILLAS HTML DE FACTURA VERSIONADAS
// ============================================================================
// Tres pestañas: ver la plantilla activa, publicar una versión nueva y
// buscar versiones antiguas para reactivarlas. Cada cambio crea una versión
// permanente; nunca se edita en sitio.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{InvoiceTemplate as Template, NewInvoiceTemplate};
use crate::services::manager_api;
use crate::utils::dates::format_timestamp;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Active,
    Create,
    History,
}

const TABS: &[(Tab, &str)] = &[
    (Tab::Active, "👁 Active Template"),
    (Tab::Create, "＋ New Template"),
    (Tab::History, "🕘 Version History"),
];

#[function_component(InvoiceTemplates)]
pub fn invoice_templates() -> Html {
    let tab = use_state(|| Tab::Active);
    let active = use_state(|| None::<Result<Template, String>>);
    // Incrementar recarga la plantilla activa tras publicar o activar
    let refresh_tick = use_state(|| 0u32);

    {
        let active = active.clone();
        use_effect_with(*refresh_tick, move |_| {
            active.set(None);
            spawn_local(async move {
                let outcome = manager_api::get_active_invoice_template().await;
                active.set(Some(outcome));
            });
        });
    }

    let refresh = {
        let refresh_tick = refresh_tick.clone();
        let tab = tab.clone();
        Callback::from(move |_: ()| {
            refresh_tick.set(*refresh_tick + 1);
            tab.set(Tab::Active);
        })
    };

    let active_version = match &*active {
        Some(Ok(template)) => Some(template.version),
        _ => None,
    };

    html! {
        <div class="screen invoice-templates">
            <div class="screen-heading">
                <span class="section-tag">{"🧾 Billing"}</span>
                <h2>
                    {"Invoice Management"}
                    if let Some(version) = active_version {
                        <span class="stat-pill outline">{format!("v{} Active", version)}</span>
                    }
                </h2>
                <p>{"Create and maintain HTML invoice templates for customer billing."}</p>
            </div>

            <div class="panel-tabs">
                { for TABS.iter().map(|(t, label)| {
                    let t = *t;
                    let is_active = *tab == t;
                    let tab = tab.clone();
                    html! {
                        <button
                            class={classes!("panel-tab", is_active.then_some("active"))}
                            onclick={Callback::from(move |_| tab.set(t))}
                        >
                            {*label}
                        </button>
                    }
                }) }
            </div>

            {
                match *tab {
                    Tab::Active => active_tab(&active, &refresh),
                    Tab::Create => html! { <CreateTemplateTab on_published={refresh.clone()} /> },
                    Tab::History => html! {
                        <HistoryTab active_version={active_version} on_activated={refresh.clone()} />
                    },
                }
            }
        </div>
    }
}

fn active_tab(active: &Option<Result<Template, String>>, refresh: &Callback<()>) -> Html {
    let retry = refresh.reform(|_: MouseEvent| ());

    match active {
        None => html! {
            <div class="screen-loading">
                <div class="spinner"></div>
                <p class="loading-title">{"Rendering Active Template"}</p>
            </div>
        },
        Some(Err(message)) => html! {
            <div class="screen-error">
                <h3>{"Could not fetch active template"}</h3>
                <p>{message.clone()}</p>
                <button class="btn-danger" onclick={retry}>{"Retry Fetch"}</button>
            </div>
        },
        Some(Ok(template)) => {
            // El contenido es HTML confiable publicado por el propio manager
            let preview = Html::from_html_unchecked(AttrValue::from(template.content.clone()));
            html! {
                <div class="template-layout">
                    <div class="template-preview">
                        <div class="preview-head">
                            <div>
                                <h3>{template.name.clone()}</h3>
                                <p class="cell-sub">
                                    {format!("Last updated {}", format_timestamp(&template.updated_at))}
                                </p>
                            </div>
                            <span class="status-chip active">{"Currently Active"}</span>
                        </div>
                        <div class="preview-canvas">{preview}</div>
                    </div>

                    <aside class="template-meta">
                        <h4>{"Template Info"}</h4>
                        <div class="meta-item">
                            <p class="field-label">{"Version"}</p>
                            <p class="cell-primary">{template.version}</p>
                        </div>
                        <div class="meta-item">
                            <p class="field-label">{"Created By"}</p>
                            <p class="cell-primary">{template.created_by.clone()}</p>
                        </div>
                        <div class="meta-item">
                            <p class="field-label">{"Created At"}</p>
                            <p class="cell-primary">{format_timestamp(&template.created_at)}</p>
                        </div>
                        <div class="meta-hint">
                            <p class="cell-primary">{"Need a change?"}</p>
                            <p class="cell-sub">{"Create a new version to update invoices."}</p>
                        </div>
                    </aside>
                </div>
            }
        }
    }
}

// ============================================================================
// Pestaña de publicación de versiones nuevas
// ============================================================================

#[derive(Properties, PartialEq)]
struct CreateTemplateTabProps {
    on_published: Callback<()>,
}

#[function_component(CreateTemplateTab)]
fn create_template_tab(props: &CreateTemplateTabProps) -> Html {
    let name = use_state(String::new);
    let content = use_state(String::new);
    let publishing = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(area.value());
        })
    };

    let clear = {
        let name = name.clone();
        let content = content.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(String::new());
            content.set(String::new());
        })
    };

    let publish = {
        let name = name.clone();
        let content = content.clone();
        let publishing = publishing.clone();
        let error = error.clone();
        let on_published = props.on_published.clone();

        Callback::from(move |_: MouseEvent| {
            let payload = NewInvoiceTemplate {
                name: (*name).clone(),
                content: (*content).clone(),
            };
            publishing.set(true);
            error.set(None);

            let publishing = publishing.clone();
            let error = error.clone();
            let on_published = on_published.clone();
            spawn_local(async move {
                match manager_api::create_invoice_template(&payload).await {
                    Ok(template) => {
                        log::info!("✅ Plantilla publicada como v{}", template.version);
                        publishing.set(false);
                        on_published.emit(());
                    }
                    Err(message) => {
                        publishing.set(false);
                        let shown = if message.is_empty() {
                            "Failed to create template".to_string()
                        } else {
                            message
                        };
                        error.set(Some(shown));
                    }
                }
            });
        })
    };

    let incomplete = name.is_empty() || content.is_empty();

    html! {
        <div class="template-form">
            <div class="section-head">
                <div>
                    <h3>{"Design New Template"}</h3>
                    <p class="cell-sub">{"Enter HTML content to define the structure of your invoices."}</p>
                </div>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="inline-error"><p>{message}</p></div>
            }

            <div class="form-group">
                <label for="tpl-name">{"Template Name"}</label>
                <input
                    type="text"
                    id="tpl-name"
                    placeholder="e.g. Standard Corporate Invoice Feb 2026"
                    value={(*name).clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-group">
                <label for="tpl-content">{"HTML Content"}</label>
                <textarea
                    id="tpl-content"
                    class="code-area"
                    placeholder="<div class='invoice'>...</div>"
                    value={(*content).clone()}
                    oninput={on_content}
                />
            </div>

            <div class="form-actions">
                <button class="btn-outline" disabled={*publishing} onclick={clear}>
                    {"Clear Design"}
                </button>
                <button class="btn-primary" disabled={*publishing || incomplete} onclick={publish}>
                    if *publishing { <span class="btn-spinner"></span> }
                    {"Publish Version"}
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Pestaña de historial: buscar una versión y reactivarla
// ============================================================================

#[derive(Properties, PartialEq)]
struct HistoryTabProps {
    active_version: Option<u32>,
    on_activated: Callback<()>,
}

#[function_component(HistoryTab)]
fn history_tab(props: &HistoryTabProps) -> Html {
    let version_input = use_state(String::new);
    let fetched = use_state(|| None::<Template>);
    let fetching = use_state(|| false);
    let activating = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_version = {
        let version_input = version_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            version_input.set(input.value());
        })
    };

    let fetch = {
        let version_input = version_input.clone();
        let fetched = fetched.clone();
        let fetching = fetching.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            let Ok(version) = version_input.parse::<u32>() else {
                return;
            };
            fetching.set(true);
            error.set(None);

            let fetched = fetched.clone();
            let fetching = fetching.clone();
            let error = error.clone();
            spawn_local(async move {
                match manager_api::get_invoice_template_by_version(version).await {
                    Ok(template) => {
                        fetching.set(false);
                        fetched.set(Some(template));
                    }
                    Err(message) => {
                        fetching.set(false);
                        fetched.set(None);
                        let shown = if message.is_empty() {
                            "Template version not found".to_string()
                        } else {
                            message
                        };
                        error.set(Some(shown));
                    }
                }
            });
        })
    };

    let activate = {
        let activating = activating.clone();
        let error = error.clone();
        let on_activated = props.on_activated.clone();

        Callback::from(move |version: u32| {
            activating.set(true);
            error.set(None);

            let activating = activating.clone();
            let error = error.clone();
            let on_activated = on_activated.clone();
            spawn_local(async move {
                match manager_api::activate_invoice_template(version).await {
                    Ok(_) => {
                        log::info!("⭐ Plantilla v{} activada", version);
                        activating.set(false);
                        on_activated.emit(());
                    }
                    Err(message) => {
                        activating.set(false);
                        let shown = if message.is_empty() {
                            "Failed to activate template".to_string()
                        } else {
                            message
                        };
                        error.set(Some(shown));
                    }
                }
            });
        })
    };

    let search_disabled = *fetching || version_input.parse::<u32>().is_err();

    html! {
        <div class="template-history">
            <div class="section-head">
                <div>
                    <h3>{"Version Ecosystem"}</h3>
                    <p class="cell-sub">{"Roll back to previous templates or review changes over time."}</p>
                </div>
            </div>

            <div class="control-bar">
                <input
                    type="number"
                    class="search-input"
                    placeholder="Search version, e.g. 5"
                    value={(*version_input).clone()}
                    oninput={on_version}
                />
                <button class="btn-primary" disabled={search_disabled} onclick={fetch}>
                    if *fetching { <span class="btn-spinner"></span> }
                    {"Fetch"}
                </button>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="inline-error"><p>{message}</p></div>
            }

            if let Some(template) = (*fetched).clone() {
                <div class="version-card">
                    <div>
                        <div class="chip-row">
                            <h4>{template.name.clone()}</h4>
                            <span class="stat-pill outline">{format!("v{}", template.version)}</span>
                        </div>
                        <p class="cell-sub">
                            {format!(
                                "Modified by {} on {}",
                                template.created_by,
                                format_timestamp(&template.updated_at)
                            )}
                        </p>
                    </div>
                    if template.is_active || props.active_version == Some(template.version) {
                        <span class="status-chip active">{"Currently Active"}</span>
                    } else {
                        <button
                            class="btn-primary"
                            disabled={*activating}
                            onclick={{
                                let version = template.version;
                                activate.reform(move |_: MouseEvent| version)
                            }}
                        >
                            if *activating { <span class="btn-spinner"></span> }
                            {"Activate Version"}
                        </button>
                    }
                </div>
            }
        </div>
    }
}
