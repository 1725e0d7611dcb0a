//! Client configuration.
//!
//! The API base URL is resolved once at startup and handed to every page
//! through a Yew context. Lookup order: the `avaliaqui-api-base` meta tag in
//! `index.html`, then `AVALIAQUI_API_BASE_URL` at build time, then the page
//! origin (empty base).

use common::api::{endpoint, EVALUATIONS_PATH, PRODUCTS_PATH};
use yew::html::Scope;
use yew::{Callback, Component};

const META_NAME: &str = "avaliaqui-api-base";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Base URL without trailing slash; empty means same origin.
    pub api_base_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let base = meta_base_url()
            .or_else(|| option_env!("AVALIAQUI_API_BASE_URL").map(str::to_string))
            .unwrap_or_default();
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Self {
        AppConfig {
            api_base_url: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn products_url(&self) -> String {
        endpoint(&self.api_base_url, PRODUCTS_PATH)
    }

    pub fn evaluations_url(&self) -> String {
        endpoint(&self.api_base_url, EVALUATIONS_PATH)
    }
}

/// Reads the configuration provided by `App`, falling back to defaults.
pub fn app_config<COMP: Component>(link: &Scope<COMP>) -> AppConfig {
    link.context::<AppConfig>(Callback::noop())
        .map(|(config, _)| config)
        .unwrap_or_default()
}

fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", META_NAME))
        .ok()??;
    meta.get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}
