// ============================================================================
// ADMIN MANAGEMENT - REJILLA DE ADMINISTRADORES
// ============================================================================
// Rejilla paginada de 9 tarjetas con paginación numerada. El alta pasa por el
// controlador de lista: crear recarga siempre la primera página.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::manager::add_admin_dialog::AddAdminDialog;
use crate::components::manager::admin_detail::AdminDetail;
use crate::components::manager::resource_detail::ResourceDetail;
use crate::config::CONFIG;
use crate::hooks::use_list;
use crate::models::{AdminAccount, NewAdminAccount};
use crate::services::manager_api;
use crate::state::MutationKind;

#[function_component(AdminManagement)]
pub fn admin_management() -> Html {
    let list = use_list::<AdminAccount>();
    let search = use_state(String::new);
    let selected_admin = use_state(|| None::<AdminAccount>);
    let selected_resource = use_state(|| None::<i64>);
    let show_dialog = use_state(|| false);
    let creating = use_state(|| false);
    let create_error = use_state(|| None::<String>);

    let page_size = CONFIG.page_config.admin_grid_page_size;

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            list.load(0, manager_api::get_admins(0, page_size));
        });
    }

    let go_to = {
        let list = list.clone();
        Callback::from(move |page: u32| {
            list.load(page, manager_api::get_admins(page, page_size));
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let open_dialog = {
        let show_dialog = show_dialog.clone();
        let create_error = create_error.clone();
        Callback::from(move |_: MouseEvent| {
            create_error.set(None);
            show_dialog.set(true);
        })
    };

    let close_dialog = {
        let show_dialog = show_dialog.clone();
        Callback::from(move |_| show_dialog.set(false))
    };

    let on_create = {
        let list = list.clone();
        let show_dialog = show_dialog.clone();
        let creating = creating.clone();
        let create_error = create_error.clone();

        Callback::from(move |payload: NewAdminAccount| {
            creating.set(true);
            create_error.set(None);

            let after = {
                let show_dialog = show_dialog.clone();
                let creating = creating.clone();
                let create_error = create_error.clone();
                Callback::from(move |result: Result<(), String>| {
                    creating.set(false);
                    match result {
                        Ok(()) => show_dialog.set(false),
                        Err(message) => {
                            let shown = if message.is_empty() {
                                "Failed to create admin".to_string()
                            } else {
                                message
                            };
                            create_error.set(Some(shown));
                        }
                    }
                })
            };

            list.mutate(
                MutationKind::Create,
                async move { manager_api::create_admin(&payload).await },
                move |page| manager_api::get_admins(page, page_size),
                after,
            );
        })
    };

    // Vista anidada: detalle de recurso a pantalla completa
    if let Some(resource_id) = *selected_resource {
        let on_back = {
            let selected_resource = selected_resource.clone();
            let selected_admin = selected_admin.clone();
            Callback::from(move |_| {
                selected_resource.set(None);
                selected_admin.set(None);
            })
        };
        return html! { <ResourceDetail {resource_id} {on_back} /> };
    }

    let state = list.snapshot();
    let query = search.to_lowercase();
    let filtered: Vec<AdminAccount> = state
        .items()
        .iter()
        .filter(|admin| {
            admin.name.to_lowercase().contains(&query)
                || admin.email.to_lowercase().contains(&query)
                || admin.business_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    let page = state.page();
    let total_pages = state.total_pages();

    html! {
        <div class="screen admin-management">
            <div class="screen-heading split">
                <div>
                    <h2>{"Manage Admins"}</h2>
                    <p>{"View and oversee all registered administrators"}</p>
                </div>
                <div class="heading-actions">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search admins..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <button class="btn-primary" onclick={open_dialog}>{"＋ Add New Admin"}</button>
                </div>
            </div>

            if let Some(message) = state.error() {
                <div class="inline-error">
                    <p>{message.to_string()}</p>
                    <button class="btn-ghost" onclick={go_to.reform(move |_| page)}>{"Retry"}</button>
                </div>
            }

            if state.is_loading() {
                <div class="admin-grid">
                    { for (0..6).map(|i| html! { <div class="skeleton-card" key={i}></div> }) }
                </div>
            } else if filtered.is_empty() {
                <div class="screen-empty">
                    <p class="empty-title">{"No admins found"}</p>
                </div>
            } else {
                <div class="admin-grid">
                    { for filtered.iter().map(|admin| {
                        let initial = admin
                            .name
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().to_string())
                            .unwrap_or_default();
                        let open_detail = {
                            let selected_admin = selected_admin.clone();
                            let admin = admin.clone();
                            Callback::from(move |_| selected_admin.set(Some(admin.clone())))
                        };

                        html! {
                            <div class="admin-card" key={admin.id}>
                                <div class="admin-card-head">
                                    <div class="admin-avatar">{initial}</div>
                                    <div>
                                        <h3>{admin.name.clone()}</h3>
                                        <p class="mono">{format!("ID: {}", admin.user_id)}</p>
                                    </div>
                                </div>
                                <div class="admin-card-body">
                                    <p class="contact-line">{admin.email.clone()}</p>
                                    <div class="business-block">
                                        <p class="business-name">{admin.business_name.clone()}</p>
                                        <p class="business-address">
                                            {format!("{}, {}", admin.business_address, admin.city)}
                                        </p>
                                    </div>
                                </div>
                                <div class="admin-card-foot">
                                    <span class="gst-chip">{admin.gst_number.clone()}</span>
                                    <button class="btn-ghost" onclick={open_detail}>{"View Details"}</button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }

            <div class="pager spread">
                <p class="pager-summary">
                    {format!("Showing {} of {} administrators", filtered.len(), state.items().len())}
                </p>
                <div class="pager-controls">
                    <button
                        class="btn-outline"
                        disabled={page == 0 || state.is_loading()}
                        onclick={go_to.reform(move |_| page.saturating_sub(1))}
                    >
                        {"Previous"}
                    </button>
                    { for (0..total_pages).map(|i| {
                        let active = page == i;
                        html! {
                            <button
                                class={classes!("page-number", active.then_some("active"))}
                                disabled={state.is_loading()}
                                onclick={go_to.reform(move |_| i)}
                            >
                                {i + 1}
                            </button>
                        }
                    }) }
                    <button
                        class="btn-outline"
                        disabled={page + 1 >= total_pages || state.is_loading()}
                        onclick={go_to.reform(move |_| page + 1)}
                    >
                        {"Next"}
                    </button>
                </div>
            </div>

            if *show_dialog {
                <AddAdminDialog
                    busy={*creating}
                    error={(*create_error).clone()}
                    on_submit={on_create}
                    on_cancel={close_dialog}
                />
            }

            if let Some(admin) = (*selected_admin).clone() {
                <AdminDetail
                    {admin}
                    on_close={{
                        let selected_admin = selected_admin.clone();
                        Callback::from(move |_| selected_admin.set(None))
                    }}
                    on_resource_click={{
                        let selected_resource = selected_resource.clone();
                        Callback::from(move |id: i64| selected_resource.set(Some(id)))
                    }}
                />
            }
        </div>
    }
}
