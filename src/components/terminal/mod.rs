mod boot;
mod caret;
mod input;
mod output;
mod terminal;

pub use boot::Boot;
pub use input::Input;
pub use output::Output;
pub use terminal::Terminal;
