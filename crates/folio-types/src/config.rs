use serde::{Deserialize, Serialize};
use crate::profile::Profile;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Top-level site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub assistant: AssistantConfig,
    pub profile: Profile,
    /// First transcript entry, shown before any question is asked
    pub greeting: String,
    /// Replaces a reply whose request or stream failed
    pub apology: String,
}

impl SiteConfig {
    pub fn new(assistant: AssistantConfig, profile: Profile) -> Self {
        let greeting = format!(
            "Hi! I'm {}'s AI Assistant. I can tell you about his SAP expertise, \
             work history at HCLTech and Merkle, or his YouTube channel {}. How can I help?",
            profile.first_name(),
            profile.contact.youtube_handle,
        );
        let apology = format!(
            "I'm sorry, I encountered an error. Please try again or contact {} directly.",
            profile.first_name()
        );
        Self {
            assistant,
            profile,
            greeting,
            apology,
        }
    }

    /// Builtin profile plus whatever the build environment supplies
    pub fn from_build_env() -> Self {
        Self::new(AssistantConfig::from_build_env(), Profile::builtin())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(AssistantConfig::default(), Profile::builtin())
    }
}

/// Settings for the hosted text-generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub model: String,
    pub api_key: String,
    pub api_base: Option<String>,
    pub temperature: f32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            api_base: None,
            temperature: 0.7,
        }
    }
}

impl AssistantConfig {
    /// A static site has no runtime environment, so the key and model are
    /// captured when the WASM bundle is compiled.
    pub fn from_build_env() -> Self {
        let api_key = option_env!("GEMINI_API_KEY")
            .or(option_env!("API_KEY"))
            .unwrap_or_default();
        Self::default().with_overrides(
            Some(api_key),
            option_env!("GEMINI_MODEL"),
            option_env!("GEMINI_API_BASE"),
        )
    }

    /// Apply non-empty overrides on top of the current values
    pub fn with_overrides(
        mut self,
        api_key: Option<&str>,
        model: Option<&str>,
        api_base: Option<&str>,
    ) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        if let Some(base) = api_base.filter(|b| !b.trim().is_empty()) {
            self.api_base = Some(base.trim().trim_end_matches('/').to_string());
        }
        self
    }

    pub fn base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
