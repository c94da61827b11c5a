mod launcher;
mod screen;
mod taskbar;
mod theme_switcher;
mod window;

pub use launcher::AppLauncher;
pub use screen::DesktopView;
pub use taskbar::Taskbar;
pub use theme_switcher::ThemeSwitcher;
pub use window::TerminalWindowView;
