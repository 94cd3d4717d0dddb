use poem_openapi::Object;

use business::domain::wishlist::use_cases::toggle::WishlistToggle;

#[derive(Debug, Clone, Object)]
pub struct WishlistToggleResponse {
    pub item_id: u32,
    /// Whether the item is in the wishlist after the toggle
    pub present: bool,
}

impl From<WishlistToggle> for WishlistToggleResponse {
    fn from(toggle: WishlistToggle) -> Self {
        Self {
            item_id: toggle.item_id.value(),
            present: toggle.present,
        }
    }
}
