mod file_operations;

pub use file_operations::copy_static_files;
