use log::info;

use crate::builder;
use crate::directory::DirectoryStructure;
use crate::utils::error::SiteResult;

/// Handle the build command
pub fn handle_build_command(dirs: &DirectoryStructure) -> SiteResult<()> {
    info!("Building site...");

    let stats = builder::build_site(dirs)?;

    info!(
        "Site built successfully at {} ({} pages, {} drafts skipped)",
        dirs.destination.display(),
        stats.pages_count - stats.drafts_count,
        stats.drafts_count
    );
    Ok(())
}
