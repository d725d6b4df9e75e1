use crate::app::controllers::style::StyleController;
use crate::app::domain::settings::AppSettings;
use crate::app::domain::text_model::ConstrainedTextModel;
use crate::app::services::persistence::PersistenceStore;

/// Everything one window's session owns. Built once at launch and handed to
/// the `SessionCoordinator`; a second window would get its own instance.
pub struct ApplicationContext {
    pub text: ConstrainedTextModel,
    pub style: StyleController,
    pub store: PersistenceStore,
    pub settings: AppSettings,
}

impl ApplicationContext {
    pub fn new(store: PersistenceStore, settings: AppSettings) -> Self {
        Self {
            text: ConstrainedTextModel::new(),
            style: StyleController::new(),
            store,
            settings,
        }
    }

    /// Context backed by the per-user settings and session files.
    pub fn from_user_dirs() -> Self {
        Self::new(
            PersistenceStore::new(PersistenceStore::default_path()),
            AppSettings::load(),
        )
    }
}
