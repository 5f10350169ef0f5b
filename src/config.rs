use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub page_config: PageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:8080".to_string(),
            api_url_production: "https://api.sportbook.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            page_config: PageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub default_page_size: u32,
    pub admin_grid_page_size: u32,
    pub history_page_size: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            admin_grid_page_size: 9,
            history_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8080").to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or("https://api.sportbook.app").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            page_config: PageConfig {
                default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                    .unwrap_or("10").parse().unwrap_or(10),
                admin_grid_page_size: option_env!("ADMIN_GRID_PAGE_SIZE")
                    .unwrap_or("9").parse().unwrap_or(9),
                history_page_size: option_env!("HISTORY_PAGE_SIZE")
                    .unwrap_or("10").parse().unwrap_or(10),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
