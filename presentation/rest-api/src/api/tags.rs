use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Shop,
    Toolkit,
    Cart,
    Wishlist,
    Contact,
    Notifications,
}
