mod yaml;

pub use yaml::mapping_to_liquid;
