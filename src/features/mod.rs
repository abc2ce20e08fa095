pub mod menu;
pub mod ordering;
pub mod pages;
pub mod settings;
