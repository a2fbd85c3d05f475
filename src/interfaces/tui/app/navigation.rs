//! Navigation and selection logic

use super::state::App;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        let len = self.controller.len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.controller.len();
        if len > 0 {
            self.selected_index = len - 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    /// Keep the selection inside the list after it shrank or was replaced
    pub fn clamp_selection(&mut self) {
        let len = self.controller.len();
        if self.selected_index >= len && self.selected_index > 0 {
            self.selected_index = len.saturating_sub(1);
        }
        self.table_state.select(Some(self.selected_index));
    }
}
