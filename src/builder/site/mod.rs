mod builder;
mod converter;
mod renderer;

pub use builder::build_site;
