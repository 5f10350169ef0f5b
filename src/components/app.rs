// ============================================================================
// APP - RAÍZ DEL PANEL
// ============================================================================
// La fase de sesión decide qué árbol se monta: splash mientras se restaura,
// login si no hay sesión válida y el dashboard del portal que dicte el rol.
// La navegación interna es un enum, sin router: el panel es una sola página.
// ============================================================================

use yew::prelude::*;

use crate::components::admin::{
    DynamicPricing, ExecutiveOverview, ResourceManagement, UserWalletDirectory,
};
use crate::components::layout::Layout;
use crate::components::login_screen::LoginScreen;
use crate::components::manager::{
    Activities, AdminManagement, AllBookings, BookingManagement, InvoiceTemplates,
    PendingBookings, UserManagement,
};
use crate::hooks::use_session;
use crate::state::{Role, SessionPhase};

/// Pantallas de ambos portales; el layout filtra las del rol activo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    // Portal admin
    Overview,
    Resources,
    Pricing,
    AdminUsers,
    // Portal manager
    BookingManagement,
    PendingBookings,
    BookingHistory,
    Admins,
    Users,
    InvoiceTemplates,
    Activities,
}

impl Screen {
    /// Pantalla de aterrizaje de cada portal
    fn landing(role: Role) -> Self {
        match role {
            Role::Admin => Screen::Overview,
            Role::Manager => Screen::BookingManagement,
        }
    }

    /// Un manager no puede quedarse en una pantalla de admin tras un
    /// cambio de sesión, y viceversa
    fn belongs_to(&self, role: Role) -> bool {
        let is_admin_screen = matches!(
            self,
            Screen::Overview | Screen::Resources | Screen::Pricing | Screen::AdminUsers
        );
        match role {
            Role::Admin => is_admin_screen,
            Role::Manager => !is_admin_screen,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let screen = use_state(|| None::<Screen>);

    let on_navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(Some(next)))
    };

    let on_logout = {
        let screen = screen.clone();
        let logout = session.logout.clone();
        Callback::from(move |_| {
            screen.set(None);
            logout.emit(());
        })
    };

    match *session.phase {
        SessionPhase::Uninitialized | SessionPhase::Initializing => html! {
            <div class="app-splash">
                <div class="spinner"></div>
                <p>{"Restoring session..."}</p>
            </div>
        },
        SessionPhase::Unauthenticated => html! {
            <LoginScreen on_login_done={session.login_done.clone()} />
        },
        SessionPhase::Authenticated(role) => {
            let current = (*screen)
                .filter(|s| s.belongs_to(role))
                .unwrap_or_else(|| Screen::landing(role));

            html! {
                <Layout {role} {current} {on_navigate} {on_logout}>
                    { render_screen(current) }
                </Layout>
            }
        }
    }
}

fn render_screen(screen: Screen) -> Html {
    match screen {
        Screen::Overview => html! { <ExecutiveOverview /> },
        Screen::Resources => html! { <ResourceManagement /> },
        Screen::Pricing => html! { <DynamicPricing /> },
        Screen::AdminUsers => html! { <UserWalletDirectory /> },
        Screen::BookingManagement => html! { <BookingManagement /> },
        Screen::PendingBookings => html! { <PendingBookings /> },
        Screen::BookingHistory => html! { <AllBookings /> },
        Screen::Admins => html! { <AdminManagement /> },
        Screen::Users => html! { <UserManagement /> },
        Screen::InvoiceTemplates => html! { <InvoiceTemplates /> },
        Screen::Activities => html! { <Activities /> },
    }
}
