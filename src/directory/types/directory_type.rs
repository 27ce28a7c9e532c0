/// Different types of directories in a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryType {
    /// Markdown content directory
    Content,

    /// Liquid templates directory
    Templates,

    /// Static assets copied verbatim
    Static,

    /// Output site directory
    Site,
}
