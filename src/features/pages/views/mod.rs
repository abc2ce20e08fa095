pub mod layout;
pub mod menu_view;
pub mod page_views;

pub use layout::{LayoutView, Page};
pub use menu_view::{MenuCategoryView, MenuPageView, MenuProductView};
pub use page_views::{AboutView, ContactView, HomeView};
