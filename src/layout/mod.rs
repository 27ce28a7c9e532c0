mod renderer;

pub use renderer::{LayoutRenderer, INDEX_TEMPLATE};
