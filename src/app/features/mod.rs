pub mod dispatch;

pub use dispatch::handle_command;
