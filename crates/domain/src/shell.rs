//! Visibility state of the authenticated shell: main sidebar, module sidebar
//! and info panel, plus the dashboard module derived from the current path.
//!
//! Every transition is a pure function of the previous state and one
//! [`ShellAction`]. [`ShellStore`] is the explicit container callers thread
//! through their components; nothing here is global or persisted.

use serde::{Deserialize, Serialize};

use crate::routes;

/// Viewport width, in CSS pixels, from which the shell uses the desktop layout.
pub const DESKTOP_BREAKPOINT_PX: u32 = 1024;

/// Independently toggled shell panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Primary navigation sidebar.
    MainSidebar,
    /// Sidebar listing the active module's sections.
    ModuleSidebar,
    /// Contextual information panel.
    InfoPanel,
}

/// Dashboard module resolved from the first path segment after `/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppModule {
    /// `/dashboard`
    Overview,
    /// `/dashboard/users/...`
    Users,
    /// `/dashboard/roles/...`
    Roles,
    /// `/dashboard/permissions/...`
    Permissions,
    /// `/dashboard/audit-logs/...`
    AuditLogs,
    /// `/dashboard/profile/...`
    Profile,
}

impl AppModule {
    /// Detects the module for a request path; query and fragment are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let rest = path.strip_prefix(routes::DASHBOARD)?;
        if rest.is_empty() {
            return Some(Self::Overview);
        }

        let segment = rest.strip_prefix('/')?.split('/').next().unwrap_or_default();
        match segment {
            "users" => Some(Self::Users),
            "roles" => Some(Self::Roles),
            "permissions" => Some(Self::Permissions),
            "audit-logs" => Some(Self::AuditLogs),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// Returns the stable module key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Users => "users",
            Self::Roles => "roles",
            Self::Permissions => "permissions",
            Self::AuditLogs => "audit_logs",
            Self::Profile => "profile",
        }
    }
}

/// One shell transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellAction {
    /// Shell mounted at the given viewport width.
    Mounted {
        /// Viewport width in CSS pixels.
        viewport_width: u32,
    },
    /// Route changed.
    Navigated {
        /// New request path.
        path: String,
    },
    /// Panel opened.
    Open {
        /// Target panel.
        panel: Panel,
    },
    /// Panel visibility inverted.
    Toggle {
        /// Target panel.
        panel: Panel,
    },
    /// Panel closed.
    Close {
        /// Target panel.
        panel: Panel,
    },
}

/// Shell visibility flags and active module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    /// Main sidebar visibility.
    pub main_sidebar: bool,
    /// Module sidebar visibility.
    pub module_sidebar: bool,
    /// Info panel visibility.
    pub info_panel: bool,
    /// Module derived from the current path.
    pub active_module: Option<AppModule>,
}

impl ShellState {
    /// Returns whether the panel is visible.
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::MainSidebar => self.main_sidebar,
            Panel::ModuleSidebar => self.module_sidebar,
            Panel::InfoPanel => self.info_panel,
        }
    }

    /// Returns the state with the panel visible.
    #[must_use]
    pub fn open(self, panel: Panel) -> Self {
        self.with_panel(panel, true)
    }

    /// Returns the state with the panel hidden.
    #[must_use]
    pub fn close(self, panel: Panel) -> Self {
        self.with_panel(panel, false)
    }

    /// Returns the state with the panel visibility inverted.
    #[must_use]
    pub fn toggle(self, panel: Panel) -> Self {
        let open = self.is_open(panel);
        self.with_panel(panel, !open)
    }

    /// Returns the initial layout for a viewport width.
    ///
    /// Desktop opens both sidebars and leaves the info panel as it was;
    /// narrower viewports close all three panels.
    #[must_use]
    pub fn mount(self, viewport_width: u32) -> Self {
        if is_desktop(viewport_width) {
            Self {
                main_sidebar: true,
                module_sidebar: true,
                ..self
            }
        } else {
            Self {
                main_sidebar: false,
                module_sidebar: false,
                info_panel: false,
                ..self
            }
        }
    }

    /// Returns the state with the module detected from the path.
    #[must_use]
    pub fn navigate(self, path: &str) -> Self {
        Self {
            active_module: AppModule::from_path(path),
            ..self
        }
    }

    fn with_panel(self, panel: Panel, open: bool) -> Self {
        let mut next = self;
        match panel {
            Panel::MainSidebar => next.main_sidebar = open,
            Panel::ModuleSidebar => next.module_sidebar = open,
            Panel::InfoPanel => next.info_panel = open,
        }
        next
    }
}

/// Returns whether the width uses the desktop layout.
#[must_use]
pub fn is_desktop(viewport_width: u32) -> bool {
    viewport_width >= DESKTOP_BREAKPOINT_PX
}

/// Applies one action to a shell state.
#[must_use]
pub fn reduce(state: ShellState, action: &ShellAction) -> ShellState {
    match action {
        ShellAction::Mounted { viewport_width } => state.mount(*viewport_width),
        ShellAction::Navigated { path } => state.navigate(path),
        ShellAction::Open { panel } => state.open(*panel),
        ShellAction::Toggle { panel } => state.toggle(*panel),
        ShellAction::Close { panel } => state.close(*panel),
    }
}

/// Explicit owner of one shell state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellStore {
    state: ShellState,
}

impl ShellStore {
    /// Creates a store mounted at the viewport width and path.
    #[must_use]
    pub fn mounted(viewport_width: u32, path: &str) -> Self {
        let mut store = Self::default();
        store.dispatch(&ShellAction::Mounted { viewport_width });
        store.dispatch(&ShellAction::Navigated {
            path: path.to_owned(),
        });
        store
    }

    /// Wraps an existing state.
    #[must_use]
    pub fn from_state(state: ShellState) -> Self {
        Self { state }
    }

    /// Applies an action and returns the new state.
    pub fn dispatch(&mut self, action: &ShellAction) -> ShellState {
        self.state = reduce(self.state, action);
        self.state
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ShellState {
        self.state
    }
}
