mod build;
mod init;
mod new;
mod serve;

pub use build::handle_build_command;
pub use init::handle_init_command;
pub use new::handle_new_command;
pub use serve::handle_serve_command;
