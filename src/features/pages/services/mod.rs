pub mod page_service;

pub use page_service::PageService;
