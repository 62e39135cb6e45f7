use std::fmt;

use egui::Color32;

/// Stable page identifier. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named canvas surface
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    id: PageId,
    name: String,
    color: Option<Color32>,
}

impl Page {
    pub fn new(id: PageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
        }
    }

    /// Default display name for a freshly created page
    pub fn default_name(id: PageId) -> String {
        format!("Page {}", id.0)
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Background color, if one was assigned
    pub fn color(&self) -> Option<Color32> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color32>) {
        self.color = color;
    }

    /// Color the page surface is filled with
    pub fn background(&self) -> Color32 {
        self.color.unwrap_or(Color32::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_color() {
        let mut page = Page::new(PageId(1), Page::default_name(PageId(1)));
        assert_eq!(page.background(), Color32::WHITE);

        page.set_color(Some(Color32::LIGHT_YELLOW));
        assert_eq!(page.background(), Color32::LIGHT_YELLOW);

        page.set_color(None);
        assert_eq!(page.background(), Color32::WHITE);
    }
}
