//! Settings page cursor

use super::events::Event;
use crate::config::BoardSize;

/// Rows of the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsItem {
    #[default]
    Width,
    Height,
    Start,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [SettingsItem::Width, SettingsItem::Height, SettingsItem::Start];

    pub fn index(self) -> usize {
        match self {
            SettingsItem::Width => 0,
            SettingsItem::Height => 1,
            SettingsItem::Start => 2,
        }
    }
}

/// Cursor over the settings items, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsCursor {
    item: SettingsItem,
}

impl SettingsCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self) -> SettingsItem {
        self.item
    }

    pub fn up(&mut self) {
        let len = SettingsItem::ALL.len();
        self.item = SettingsItem::ALL[(self.item.index() + len - 1) % len];
    }

    pub fn down(&mut self) {
        let len = SettingsItem::ALL.len();
        self.item = SettingsItem::ALL[(self.item.index() + 1) % len];
    }

    /// Act on the selected item
    ///
    /// Width and height step to the next size, wrapping from the largest
    /// back to the smallest. Start returns [`Event::StartGame`].
    pub fn select(&self, size: &mut BoardSize) -> Option<Event> {
        match self.item {
            SettingsItem::Width => {
                size.width = size.width.wrapping_next();
                None
            }
            SettingsItem::Height => {
                size.height = size.height.wrapping_next();
                None
            }
            SettingsItem::Start => Some(Event::StartGame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = SettingsCursor::new();
        cursor.up();
        assert_eq!(cursor.item(), SettingsItem::Start);
        cursor.down();
        assert_eq!(cursor.item(), SettingsItem::Width);
        cursor.down();
        cursor.down();
        cursor.down();
        assert_eq!(cursor.item(), SettingsItem::Width);
    }

    #[test]
    fn test_select_dimension_wraps() {
        let mut size = BoardSize::new(5, 2).unwrap();
        let mut cursor = SettingsCursor::new();

        assert_eq!(cursor.select(&mut size), None);
        assert_eq!(size.width.get(), 2);

        cursor.down();
        assert_eq!(cursor.select(&mut size), None);
        assert_eq!(size.height.get(), 3);
    }

    #[test]
    fn test_select_start() {
        let mut size = BoardSize::default();
        let mut cursor = SettingsCursor::new();
        cursor.up();
        assert_eq!(cursor.select(&mut size), Some(Event::StartGame));
        assert_eq!(size, BoardSize::default());
    }
}
