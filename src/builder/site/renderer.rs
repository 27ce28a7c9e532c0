use std::path::{Path, PathBuf};

use liquid::model::Value;
use log::{debug, info};

use crate::builder::page::Page;
use crate::builder::site::converter::{
    config_to_liquid, page_globals, pages_to_liquid, site_globals,
};
use crate::config::Config;
use crate::layout::{LayoutRenderer, INDEX_TEMPLATE};
use crate::minify::minify_html;
use crate::utils::error::SiteResult;
use crate::utils::path::resolve_output_path;

/// A rendered output file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Renders pages, the index and the extras into output files
pub struct SiteRenderer<'a> {
    config: &'a Config,
    layouts: LayoutRenderer,
    output_dir: PathBuf,
    config_value: Value,
}

impl<'a> SiteRenderer<'a> {
    pub fn new<P: AsRef<Path>>(config: &'a Config, layouts: LayoutRenderer, output_dir: P) -> Self {
        SiteRenderer {
            config,
            layouts,
            output_dir: output_dir.as_ref().to_path_buf(),
            config_value: config_to_liquid(config),
        }
    }

    /// Render every non-draft page through its type template and the base
    pub fn render_pages(&self, pages: &[Page]) -> SiteResult<Vec<RenderedFile>> {
        let mut files = Vec::new();

        for page in pages {
            if page.draft {
                info!("Skipping draft {}", page.filepath.display());
                continue;
            }

            let path = resolve_output_path(&self.output_dir, &page.rel_permalink)?;
            debug!("Rendering {} -> {}", page.filepath.display(), path.display());

            let globals = page_globals(&self.config_value, page);
            let html = self.layouts.render_page(&page.page_type, &globals)?;

            files.push(RenderedFile {
                path,
                contents: self.finish(html)?,
            });
        }

        Ok(files)
    }

    /// Render `index.html` against every page, drafts included
    pub fn render_index(&self, pages: &Value) -> SiteResult<RenderedFile> {
        let globals = site_globals(&self.config_value, pages);
        let html = self.layouts.render_index(&globals)?;

        Ok(RenderedFile {
            path: self.output_dir.join(INDEX_TEMPLATE),
            contents: self.finish(html)?,
        })
    }

    /// Render each configured extra on its own, unminified
    pub fn render_extras(&self, pages: &Value) -> SiteResult<Vec<RenderedFile>> {
        let globals = site_globals(&self.config_value, pages);

        self.config
            .extras
            .iter()
            .map(|extra| -> SiteResult<RenderedFile> {
                let path = resolve_output_path(&self.output_dir, &extra.url)?;
                debug!("Rendering extra {} -> {}", extra.template, path.display());

                Ok(RenderedFile {
                    path,
                    contents: self.layouts.render_standalone(&extra.template, &globals)?,
                })
            })
            .collect()
    }

    /// Render the pages, the index and the extras, in that order
    pub fn render_site(&self, pages: &[Page]) -> SiteResult<Vec<RenderedFile>> {
        let pages_value = pages_to_liquid(pages);

        let mut files = self.render_pages(pages)?;
        files.push(self.render_index(&pages_value)?);
        files.extend(self.render_extras(&pages_value)?);

        Ok(files)
    }

    fn finish(&self, html: String) -> SiteResult<String> {
        if self.config.minify {
            minify_html(&html)
        } else {
            Ok(html)
        }
    }
}
