pub mod category;
pub mod product;
pub mod subcategory;

pub use category::{Category, CategoryTranslation};
pub use product::{Product, ProductTranslation};
pub use subcategory::{Subcategory, SubcategoryTranslation};
