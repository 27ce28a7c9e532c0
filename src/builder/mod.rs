pub mod page;
pub mod processor;
pub mod site;

pub use site::build_site;
