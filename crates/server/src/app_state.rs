use storefront::{HeroRotator, ScheduledTask};

use crate::api::ApiContext;

/// Shared by every handler. Dropping the last reference stops the hero timer
/// and the idle-session sweeper.
pub(crate) struct AppState {
    pub(crate) api: ApiContext,
    pub(crate) hero: HeroRotator,
    #[allow(dead_code)]
    pub(crate) session_sweeper: ScheduledTask,
    pub(crate) body_limit: usize,
}
