mod navigation;
mod object_operations;
mod state;

pub use state::{App, CurrentScreen};
