//! App state definition and basic state management

use ratatui::widgets::TableState;

use crate::config::get_config;
use crate::controller::ListController;
use crate::errors::BucketlistError;
use crate::storage::{StoreFactory, StoredObject};

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    DeleteConfirm,
    Help,
    Exiting,
}

pub struct App {
    pub controller: ListController,
    pub current_screen: CurrentScreen,

    // UI state
    pub selected_index: usize,
    pub table_state: TableState,
    pub status_message: String,
    pub error_message: String,

    /// Object captured when the delete prompt was shown. The confirmed
    /// delete resolves this exact instance, never the row index, so a
    /// reload finishing between prompt and confirmation cannot redirect
    /// the delete to a different row.
    pub pending_delete: Option<StoredObject>,
}

impl App {
    pub async fn new() -> Result<App, BucketlistError> {
        let config = get_config();
        let store = StoreFactory::create(config).await?;
        let controller = ListController::new(store);

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Ok(App {
            controller,
            current_screen: CurrentScreen::Main,
            selected_index: 0,
            table_state,
            status_message: String::new(),
            error_message: String::new(),
            pending_delete: None,
        })
    }

    pub fn selected_object(&self) -> Option<&StoredObject> {
        self.controller.item(self.selected_index)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }
}
