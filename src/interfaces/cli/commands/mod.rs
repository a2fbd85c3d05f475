mod add;
mod list;
mod remove;

pub use add::add_object;
pub use list::list_objects;
pub use remove::remove_object;
