mod directory_structure;
mod operations;

pub use directory_structure::DirectoryStructure;
