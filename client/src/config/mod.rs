//! Static configuration registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is compile-time data read by the layout, the pages and the
//! API client: application settings, the route table, the navigation tree,
//! REST endpoint paths, chart colours and skill-level labels. Nothing in this
//! module is mutated at runtime.

pub mod api;
pub mod navigation;
pub mod palette;
pub mod routes;
pub mod skills;


use serde::{Deserialize, Serialize};

/// Product name shown in the header, drawer and document title.
pub const APP_NAME: &str = "GenMentor";

/// Learning goal shown in the header chip until goals are backed by the API.
pub const ACTIVE_GOAL_LABEL: &str = "Web Development";

/// Language model the backend is asked to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmType {
    Gpt4o,
    Llama,
    Deepseek,
    Together,
}

impl LlmType {
    pub const ALL: [LlmType; 4] = [LlmType::Gpt4o, LlmType::Llama, LlmType::Deepseek, LlmType::Together];

    /// Identifier sent to the backend.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gpt4o => "gpt4o",
            Self::Llama => "llama",
            Self::Deepseek => "deepseek",
            Self::Together => "together",
        }
    }

    /// Human-readable model name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gpt4o => "GPT-4o",
            Self::Llama => "Llama3.2",
            Self::Deepseek => "DeepSeek",
            Self::Together => "Llama3.3-Turbo",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|llm| llm.key() == key)
    }
}

/// Feature switches that hide whole surfaces of the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub dark_mode: bool,
    pub notifications: bool,
    pub analytics: bool,
    pub chatbot: bool,
}

/// Application-wide settings, fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Base URL of the learning-assistant backend.
    pub backend_endpoint: &'static str,
    /// When set, pages use fabricated data instead of calling the backend.
    pub use_mock_data: bool,
    pub llm_type: LlmType,
    pub features: FeatureFlags,
}

impl AppConfig {
    #[must_use]
    pub const fn llm_label(&self) -> &'static str {
        self.llm_type.label()
    }
}

pub const APP_CONFIG: AppConfig = AppConfig {
    backend_endpoint: "http://127.0.0.1:5006/",
    use_mock_data: false,
    llm_type: LlmType::Gpt4o,
    features: FeatureFlags { dark_mode: true, notifications: true, analytics: true, chatbot: true },
};
