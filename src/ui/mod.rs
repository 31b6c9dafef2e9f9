pub mod console;
pub mod screens;

pub use console::Console;
