mod central_panel;
mod page_navigation;
mod toolbar;

pub use central_panel::central_panel;
pub use page_navigation::page_navigation;
pub use toolbar::toolbar;
