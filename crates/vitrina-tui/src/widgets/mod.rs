pub mod menu;
pub mod navbar;
pub mod page;
pub mod status_bar;

pub use menu::MenuWidget;
pub use navbar::NavbarWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
