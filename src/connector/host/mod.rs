mod command;
mod plugin;
mod terminal;

pub use command::*;
pub use plugin::*;
pub use terminal::*;
