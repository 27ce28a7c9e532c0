use liquid::model::Value;
use liquid::Object;

use crate::builder::page::Page;
use crate::builder::processor::mapping_to_liquid;
use crate::config::Config;
use crate::front_matter::types::DATE_FORMAT;

/// Convert the configuration to the `config` template object
pub fn config_to_liquid(config: &Config) -> Value {
    let mut obj = Object::new();

    obj.insert("title".into(), Value::scalar(config.title.clone()));
    obj.insert("description".into(), Value::scalar(config.description.clone()));
    obj.insert("baseurl".into(), Value::scalar(config.baseurl.clone()));
    obj.insert("language".into(), Value::scalar(config.language.clone()));
    obj.insert("highlighting".into(), Value::scalar(config.highlighting.clone()));
    obj.insert("minify".into(), Value::scalar(config.minify));

    let extras = config
        .extras
        .iter()
        .map(|extra| {
            let mut e = Object::new();
            e.insert("type".into(), Value::scalar(extra.extra_type.clone()));
            e.insert("template".into(), Value::scalar(extra.template.clone()));
            e.insert("url".into(), Value::scalar(extra.url.clone()));
            Value::Object(e)
        })
        .collect();
    obj.insert("extras".into(), Value::Array(extras));

    Value::Object(obj)
}

/// Convert a page to a Liquid value for template rendering
pub fn page_to_liquid(page: &Page) -> Value {
    let mut obj = Object::new();

    obj.insert("filepath".into(), Value::scalar(page.filepath.to_string_lossy().to_string()));
    obj.insert("raw".into(), Value::scalar(page.html.clone()));
    obj.insert("html".into(), Value::scalar(page.html.clone()));
    obj.insert("text".into(), Value::scalar(page.text.clone()));
    obj.insert("summary".into(), Value::scalar(page.summary.clone()));
    obj.insert("meta".into(), Value::Object(mapping_to_liquid(&page.meta)));
    obj.insert("title".into(), Value::scalar(page.title.clone()));
    obj.insert("type".into(), Value::scalar(page.page_type.clone()));
    obj.insert("rel_permalink".into(), Value::scalar(page.rel_permalink.clone()));
    obj.insert("url".into(), Value::scalar(page.rel_permalink.clone()));
    obj.insert("created".into(), Value::scalar(page.created.format(DATE_FORMAT).to_string()));
    obj.insert("draft".into(), Value::scalar(page.draft));

    Value::Object(obj)
}

/// Convert the sorted page list to the `pages` template array
pub fn pages_to_liquid(pages: &[Page]) -> Value {
    Value::Array(pages.iter().map(page_to_liquid).collect())
}

/// Globals for a single page render: `config` and `page`
pub fn page_globals(config: &Value, page: &Page) -> Object {
    let mut globals = Object::new();
    globals.insert("config".into(), config.clone());
    globals.insert("page".into(), page_to_liquid(page));
    globals
}

/// Globals for the index and extras: `config` and `pages`
pub fn site_globals(config: &Value, pages: &Value) -> Object {
    let mut globals = Object::new();
    globals.insert("config".into(), config.clone());
    globals.insert("pages".into(), pages.clone());
    globals
}
