//! Current-page state and the page transition clock.

use folio_types::page::Page;

/// Length of the fade/slide when a new page is shown, in seconds
pub const TRANSITION_SECS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ViewRouter {
    current: Page,
    menu_open: bool,
    /// Frame time (seconds) at which `current` was entered
    changed_at: f64,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            current: Page::Home,
            menu_open: false,
            changed_at: 0.0,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Show `page`. Also closes the mobile menu.
    /// Returns true when the page actually changed.
    pub fn navigate(&mut self, page: Page, now: f64) -> bool {
        self.menu_open = false;
        if page == self.current {
            return false;
        }
        log::debug!("navigate {} -> {}", self.current.id(), page.id());
        self.current = page;
        self.changed_at = now;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Eased progress of the entry transition, 0.0 at the switch and 1.0 once settled
    pub fn transition_progress(&self, now: f64) -> f32 {
        let t = ((now - self.changed_at) / TRANSITION_SECS).clamp(0.0, 1.0) as f32;
        ease_in_out(t)
    }

    pub fn is_transitioning(&self, now: f64) -> bool {
        self.transition_progress(now) < 1.0
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quadratic ease-in-out on [0, 1]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
