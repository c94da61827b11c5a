pub mod desktop;
pub mod icons;
pub mod terminal;

pub use desktop::DesktopView;
