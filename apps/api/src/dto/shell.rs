use orus_domain::shell::{AppModule, ShellAction, ShellState};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of the shell visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/shell-state-response.ts"
)]
pub struct ShellStateResponse {
    pub main_sidebar: bool,
    pub module_sidebar: bool,
    pub info_panel: bool,
    #[ts(type = "string | null")]
    pub active_module: Option<AppModule>,
}

/// Incoming payload applying one shell action to a client-held state.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/shell-reduce-request.ts"
)]
pub struct ShellReduceRequest {
    pub state: ShellStateResponse,
    #[ts(type = "{ type: string, viewport_width?: number, path?: string, panel?: string }")]
    pub action: ShellAction,
}

impl From<ShellState> for ShellStateResponse {
    fn from(value: ShellState) -> Self {
        Self {
            main_sidebar: value.main_sidebar,
            module_sidebar: value.module_sidebar,
            info_panel: value.info_panel,
            active_module: value.active_module,
        }
    }
}

impl From<ShellStateResponse> for ShellState {
    fn from(value: ShellStateResponse) -> Self {
        Self {
            main_sidebar: value.main_sidebar,
            module_sidebar: value.module_sidebar,
            info_panel: value.info_panel,
            active_module: value.active_module,
        }
    }
}
