pub mod app;
pub mod carousel;
pub mod event;
pub mod input;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::AmberNight;
