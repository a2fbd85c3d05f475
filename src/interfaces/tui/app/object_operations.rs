//! Object CRUD operations
//!
//! Each operation awaits the store once and surfaces the outcome in the
//! status bar. Failures never touch the displayed list (a failed load shows
//! it empty, as the controller clears before querying).

use super::state::App;

impl App {
    pub async fn refresh_objects(&mut self) {
        match self.controller.load().await {
            Ok(count) => self.set_status(format!("Objects loaded ({})", count)),
            Err(e) => self.set_error(format!("Error loading objects: {}", e)),
        }
        self.clamp_selection();
    }

    pub async fn create_object(&mut self) {
        match self.controller.create().await {
            Ok(object) => {
                self.set_status(format!("Created object {}", object.label()));
                // New object is prepended; follow it
                self.jump_to_top();
            }
            Err(e) => self.set_error(format!("Error creating object: {}", e)),
        }
    }

    /// Capture the selected object for the confirmation prompt.
    /// Returns false when the list is empty and there is nothing to delete.
    pub fn request_delete(&mut self) -> bool {
        match self.selected_object() {
            Some(object) => {
                self.pending_delete = Some(object.clone());
                true
            }
            None => false,
        }
    }

    pub async fn confirm_delete(&mut self) {
        let Some(target) = self.pending_delete.take() else {
            return;
        };
        match self.controller.delete(&target).await {
            Ok(()) => {
                self.set_status("Deleted object".to_string());
                self.clamp_selection();
            }
            Err(e) => self.set_error(format!("Error deleting object: {}", e)),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
