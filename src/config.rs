//! App Configuration
//!
//! Resolved once at startup from `<meta>` tags in the host page:
//! - `task-api-base`: origin serving `/api/tasks` (default: page origin)
//! - `task-toast-delay`: toast auto-hide delay in ms
//! - `task-log-level`: console log level (default: `info`)

use log::LevelFilter;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

use crate::toast::DEFAULT_TOAST_DELAY_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// No trailing slash
    pub api_base: String,
    pub toast_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read the host page
    pub fn from_document() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::resolve(
            meta_content("task-api-base"),
            origin,
            meta_content("task-toast-delay"),
            meta_content("task-log-level"),
        )
    }

    pub fn resolve(
        api_base: Option<String>,
        origin: Option<String>,
        toast_delay: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        let api_base = api_base
            .filter(|base| !base.trim().is_empty())
            .or(origin)
            .unwrap_or_default();
        let toast_delay_ms = toast_delay
            .and_then(|delay| delay.trim().parse().ok())
            .unwrap_or(DEFAULT_TOAST_DELAY_MS);
        let log_level = log_level
            .map(|level| console_logger::parse_level(&level))
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            toast_delay_ms,
            log_level,
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!(r#"meta[name="{}"]"#, name))
        .ok()??;
    let meta = element.dyn_into::<HtmlMetaElement>().ok()?;
    Some(meta.content())
}
