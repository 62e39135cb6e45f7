mod page_tab;

pub use page_tab::{PageTab, STRIP_FILL};
