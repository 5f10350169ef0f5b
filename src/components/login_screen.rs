// ============================================================================
// LOGIN SCREEN - OTP POR EMAIL EN DOS PASOS
// ============================================================================
// Paso 1: email → request OTP. Paso 2: código de 6 dígitos → verify + login.
// Cambiar de portal resetea el formulario entero.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::{auth_api, session_service};
use crate::state::session_state::Role;

#[derive(Clone, Copy, PartialEq)]
enum LoginStep {
    Email,
    Otp,
}

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login_done: Callback<Role>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let portal = use_state(|| Role::Admin);
    let step = use_state(|| LoginStep::Email);
    let email = use_state(String::new);
    let otp = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let select_portal = {
        let portal = portal.clone();
        let step = step.clone();
        let email = email.clone();
        let otp = otp.clone();
        let error = error.clone();

        Callback::from(move |next: Role| {
            if *portal != next {
                portal.set(next);
                step.set(LoginStep::Email);
                email.set(String::new());
                otp.set(String::new());
                error.set(None);
            }
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_otp_input = {
        let otp = otp.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            otp.set(input.value());
        })
    };

    let on_submit_email = {
        let step = step.clone();
        let email = email.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let address = email.trim().to_string();
            if !looks_like_email(&address) {
                error.set(Some("Please enter a valid email address".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);

            let step = step.clone();
            let email_state = email.clone();
            let busy = busy.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_api::request_otp(&address).await {
                    Ok(()) => {
                        email_state.set(address);
                        step.set(LoginStep::Otp);
                    }
                    Err(message) => {
                        let shown = if message.is_empty() {
                            "Failed to send OTP. Please try again.".to_string()
                        } else {
                            message
                        };
                        error.set(Some(shown));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_submit_otp = {
        let portal = portal.clone();
        let email = email.clone();
        let otp = otp.clone();
        let busy = busy.clone();
        let error = error.clone();
        let on_login_done = props.on_login_done.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let address = (*email).clone();
            let code = otp.trim().to_string();
            let selected = *portal;

            busy.set(true);
            error.set(None);

            let busy = busy.clone();
            let error = error.clone();
            let on_login_done = on_login_done.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_api::verify_otp(&address, &code).await {
                    Ok(response) => match response.token {
                        Some(token) => {
                            match session_service::login_with_token(&token, selected) {
                                Ok(role) => {
                                    log::info!("✅ Login correcto en portal {}", role.portal_label());
                                    on_login_done.emit(role);
                                }
                                Err(reason) => error.set(Some(reason.to_string())),
                            }
                        }
                        None => error.set(Some("No token received from server.".to_string())),
                    },
                    Err(message) => {
                        let shown = if message.is_empty() {
                            "Invalid OTP. Please try again.".to_string()
                        } else {
                            message
                        };
                        error.set(Some(shown));
                    }
                }
                busy.set(false);
            });
        })
    };

    let back_to_email = {
        let step = step.clone();
        let otp = otp.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            step.set(LoginStep::Email);
            otp.set(String::new());
            error.set(None);
        })
    };

    let (title, subtitle) = match (*step, *portal) {
        (LoginStep::Otp, _) => (
            "Verify Identity".to_string(),
            format!("Enter the code sent to {}", *email),
        ),
        (LoginStep::Email, Role::Admin) => (
            "Admin Portal".to_string(),
            "Secure access for administrators.".to_string(),
        ),
        (LoginStep::Email, Role::Manager) => (
            "Manager Portal".to_string(),
            "Secure access for operational managers.".to_string(),
        ),
    };

    let email_disabled = *busy || email.trim().is_empty() || !email.contains('@');
    let otp_disabled = *busy || otp.trim().len() != 6;

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="portal-toggle">
                    <button
                        type="button"
                        class={classes!("portal-option", (*portal == Role::Admin).then_some("active"))}
                        onclick={select_portal.reform(|_| Role::Admin)}
                    >
                        {"Admin"}
                    </button>
                    <button
                        type="button"
                        class={classes!("portal-option", (*portal == Role::Manager).then_some("active"))}
                        onclick={select_portal.reform(|_| Role::Manager)}
                    >
                        {"Manager"}
                    </button>
                </div>

                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🏟️"}</div>
                    </div>
                    <h1>{title}</h1>
                    <p>{subtitle}</p>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="login-error">{message}</div>
                }

                if *step == LoginStep::Email {
                    <form class="login-form" onsubmit={on_submit_email}>
                        <div class="form-group">
                            <label for="email">{"Email Address"}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="admin@example.com"
                                value={(*email).clone()}
                                oninput={on_email_input}
                                disabled={*busy}
                            />
                        </div>
                        <button type="submit" class="btn-login" disabled={email_disabled}>
                            { if *busy { "Processing..." } else { "Request OTP" } }
                        </button>
                    </form>
                } else {
                    <form class="login-form" onsubmit={on_submit_otp}>
                        <div class="form-group">
                            <label for="otp">{"Verification Code"}</label>
                            <input
                                type="text"
                                id="otp"
                                name="otp"
                                class="otp-input"
                                placeholder="• • • • • •"
                                maxlength="6"
                                autocomplete="one-time-code"
                                value={(*otp).clone()}
                                oninput={on_otp_input}
                                disabled={*busy}
                            />
                        </div>
                        <button type="submit" class="btn-login" disabled={otp_disabled}>
                            { if *busy { "Processing..." } else { "Verify & Login" } }
                        </button>
                        <button type="button" class="btn-change-email" onclick={back_to_email}>
                            { format!("Not {}? ", *email) }
                            <span>{"Change email"}</span>
                        </button>
                    </form>
                }

                <div class="login-footer">
                    <p>{"Secured by SportBook Identity"}</p>
                </div>
            </div>
        </div>
    }
}

/// Validación mínima de email: algo@algo.algo, sin espacios.
/// Suficiente para no mandar OTPs a direcciones claramente rotas.
fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normal_emails() {
        assert!(looks_like_email("admin@example.com"));
        assert!(looks_like_email("a.b@sub.dominio.es"));
    }

    #[test]
    fn test_rejects_broken_formats() {
        assert!(!looks_like_email("sin-arroba"));
        assert!(!looks_like_email("@dominio.com"));
        assert!(!looks_like_email("user@"));
        assert!(!looks_like_email("user@dominio"));
        assert!(!looks_like_email("user@.com"));
        assert!(!looks_like_email("user@dominio."));
        assert!(!looks_like_email("user name@dominio.com"));
        assert!(!looks_like_email("user@dos@arrobas.com"));
    }
}
