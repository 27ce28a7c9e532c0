use std::time::{Duration, Instant};

use log::{debug, info};

use crate::builder::page::{collect_markdown_files, load_page, sort_pages};
use crate::builder::site::renderer::{RenderedFile, SiteRenderer};
use crate::config::load_config;
use crate::directory::DirectoryStructure;
use crate::layout::LayoutRenderer;
use crate::liquid::create_parser;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::SiteResult;
use crate::utils::fs::write_file;

/// Build statistics
#[derive(Debug, Default)]
pub struct BuildStats {
    /// Number of pages built, drafts included
    pub pages_count: usize,
    /// Number of drafts that were not written
    pub drafts_count: usize,
    /// Number of files written (pages, index and extras)
    pub files_written: usize,
    /// Number of static files copied
    pub static_files_count: usize,
    /// Build duration
    pub duration: Duration,
}

/// Build the site rooted at `dirs` into its `public/` directory.
///
/// Every page is built and every template rendered before the first output
/// file is written, so content and template errors leave `public/` untouched.
pub fn build_site(dirs: &DirectoryStructure) -> SiteResult<BuildStats> {
    let start_time = Instant::now();
    let mut stats = BuildStats::default();

    let config = load_config(&dirs.config_file)?;
    info!("Building site from {}", dirs.root.display());

    let files = collect_markdown_files(&dirs.content_dir)?;
    let markdown = MarkdownRenderer::new(&config);

    let mut pages = Vec::with_capacity(files.len());
    for file in &files {
        pages.push(load_page(file, &markdown)?);
    }
    sort_pages(&mut pages);

    stats.pages_count = pages.len();
    stats.drafts_count = pages.iter().filter(|page| page.draft).count();
    info!("Built {} pages ({} drafts)", stats.pages_count, stats.drafts_count);

    let layouts = LayoutRenderer::new(&dirs.templates_dir, create_parser(&config)?);
    let renderer = SiteRenderer::new(&config, layouts, &dirs.destination);
    let rendered = renderer.render_site(&pages)?;

    dirs.create_site_directories()?;
    stats.files_written = write_files(&rendered)?;

    stats.static_files_count = dirs.copy_static_files()?;

    stats.duration = start_time.elapsed();
    info!(
        "Wrote {} files and copied {} static files in {:.2?}",
        stats.files_written, stats.static_files_count, stats.duration
    );

    Ok(stats)
}

/// Write rendered files, creating parent directories as needed
pub fn write_files(files: &[RenderedFile]) -> SiteResult<usize> {
    for file in files {
        debug!("Writing {}", file.path.display());
        write_file(&file.path, &file.contents)?;
    }

    Ok(files.len())
}
