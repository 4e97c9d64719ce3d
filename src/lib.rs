mod config;
mod error;
mod log;
mod node;
pub mod numeral;
mod parser;
mod render;

pub use config::{Config, ListDefaults, RenderConfig};
pub use error::{NumberField, SpecError};
pub use log::init as init_logging;
pub use node::{Attachment, ListNode, ListTree, NodeId, NumberingStyle};
pub use parser::ParseOptions;
pub use render::{RenderOptions, render_tree};

/// Parse a specification string using the compiled-in defaults.
pub fn parse(spec: &str) -> Result<ListTree, SpecError> {
    parser::parse(spec, &ParseOptions::from(&Config::compiled_default()))
}

/// Parse a specification string with explicit options.
pub fn parse_with_options(spec: &str, options: &ParseOptions) -> Result<ListTree, SpecError> {
    parser::parse(spec, options)
}

/// Render trees using the compiled-in defaults.
pub fn render(trees: &[ListTree]) -> String {
    render::render(trees, &RenderOptions::default())
}

/// Render trees with explicit options.
pub fn render_with_options(trees: &[ListTree], options: &RenderOptions) -> String {
    render::render(trees, options)
}

/// Parse every specification, then render them one after another.
///
/// Nothing is rendered unless every specification parses.
pub fn specs_to_text<S: AsRef<str>>(specs: &[S]) -> Result<String, SpecError> {
    let config = Config::compiled_default();
    specs_to_text_with_options(
        specs,
        &ParseOptions::from(&config),
        &RenderOptions::from(&config),
    )
}

/// Like [`specs_to_text`], with explicit options.
pub fn specs_to_text_with_options<S: AsRef<str>>(
    specs: &[S],
    parse_options: &ParseOptions,
    render_options: &RenderOptions,
) -> Result<String, SpecError> {
    let trees = specs
        .iter()
        .map(|spec| parser::parse(spec.as_ref(), parse_options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(render::render(&trees, render_options))
}
