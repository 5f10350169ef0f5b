// ============================================================================
// LAYOUT - SIDEBAR + HEADER COMPARTIDOS POR TODAS LAS PANTALLAS
// ============================================================================
// El menú lateral depende del portal (admin u operaciones); el contenido
// se inyecta como children.
// ============================================================================

use yew::prelude::*;

use crate::components::app::Screen;
use crate::state::session_state::Role;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub role: Role,
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
    pub on_logout: Callback<()>,
    pub children: Children,
}

/// Entradas del menú según portal: (pantalla, icono, etiqueta)
fn nav_items(role: Role) -> &'static [(Screen, &'static str, &'static str)] {
    match role {
        Role::Admin => &[
            (Screen::Overview, "📊", "Executive Dashboard"),
            (Screen::Resources, "🏟️", "Resource & Inventory"),
            (Screen::Pricing, "💰", "Dynamic Pricing"),
            (Screen::AdminUsers, "👥", "User & Wallet"),
        ],
        Role::Manager => &[
            (Screen::BookingManagement, "📋", "Booking Management"),
            (Screen::PendingBookings, "⏳", "Pending Bookings"),
            (Screen::BookingHistory, "📖", "Booking History"),
            (Screen::Admins, "🛡️", "Manage Admins"),
            (Screen::Users, "👥", "User & Wallet"),
            (Screen::InvoiceTemplates, "🧾", "Invoice Template"),
            (Screen::Activities, "🎯", "Activities"),
        ],
    }
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (portal_title, portal_icon) = match props.role {
        Role::Admin => ("Admin Portal", "📅"),
        Role::Manager => ("Manager Portal", "👥"),
    };
    let role_label = match props.role {
        Role::Admin => "Super Admin",
        Role::Manager => "Manager",
    };

    html! {
        <div class="dashboard-shell">
            <aside class="sidebar">
                <div class="sidebar-brand">
                    <span class={classes!("brand-icon", props.role.portal_label())}>{portal_icon}</span>
                    <h1>{portal_title}</h1>
                </div>

                <nav class="sidebar-nav">
                    { for nav_items(props.role).iter().map(|(screen, icon, label)| {
                        let screen = *screen;
                        let active = props.current == screen;
                        let onclick = props.on_navigate.reform(move |_| screen);
                        html! {
                            <button
                                class={classes!("nav-item", active.then_some("active"))}
                                {onclick}
                            >
                                <span class="nav-icon">{*icon}</span>
                                <span class="nav-label">{*label}</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="sidebar-footer">
                    <button class="nav-item" disabled=true>
                        <span class="nav-icon">{"⚙️"}</span>
                        <span class="nav-label">{"Settings"}</span>
                    </button>
                    <button class="nav-item logout" onclick={props.on_logout.reform(|_| ())}>
                        <span class="nav-icon">{"🚪"}</span>
                        <span class="nav-label">{"Logout"}</span>
                    </button>
                </div>
            </aside>

            <div class="dashboard-main">
                <header class="dashboard-header">
                    <div class="header-search">
                        <input type="text" placeholder="Global search..." />
                    </div>
                    <div class="header-actions">
                        <button class="header-bell">
                            {"🔔"}
                            <span class="bell-dot"></span>
                        </button>
                        <div class="header-user">
                            <div class="user-meta">
                                <span class="user-name">{"Hitendra Singh"}</span>
                                <span class="user-role">{role_label}</span>
                            </div>
                            <div class="user-avatar">{"HS"}</div>
                        </div>
                    </div>
                </header>

                <main class="dashboard-content">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}
