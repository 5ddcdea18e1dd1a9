use serde::{Deserialize, Serialize};

/// Top-level views of the site, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Contact,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::About,
            Page::Skills,
            Page::Experience,
            Page::Contact,
        ]
    }

    /// Stable identifier, also handed to the background renderer
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Skills => "skills",
            Page::Experience => "experience",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Skills => "Skills",
            Page::Experience => "Work",
            Page::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::all().iter().copied().find(|p| p.id() == id)
    }

    /// Camera position the background drifts toward while this page is shown
    pub fn camera_target(&self) -> [f32; 3] {
        match self {
            Page::Home | Page::Contact => [0.0, 0.0, 10.0],
            Page::About => [-5.0, 2.0, 12.0],
            Page::Skills => [5.0, -2.0, 8.0],
            Page::Experience => [0.0, 5.0, 15.0],
        }
    }
}
