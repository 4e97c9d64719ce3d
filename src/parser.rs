use crate::config::{Config, ListDefaults};
use crate::error::{NumberField, SpecError};
use crate::log::{debug, warn};
use crate::node::{Attachment, ListNode, ListTree, NodeId, NumberingStyle};

/// Settings that change how specifications are read
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Reject malformed `number`/`length` fields instead of reading them as 0
    pub strict: bool,
    pub defaults: ListDefaults,
}

impl From<&Config> for ParseOptions {
    fn from(config: &Config) -> Self {
        Self {
            strict: false,
            defaults: config.list.clone(),
        }
    }
}

/// Parse one specification string into a tree of lists.
pub fn parse(spec: &str, options: &ParseOptions) -> Result<ListTree, SpecError> {
    let mut nodes = Vec::new();
    let root = parse_node(spec, options, &mut nodes)?;
    Ok(ListTree::from_parts(nodes, root))
}

/// Parse `number:length[:option]*[;children]`, pushing the node and all of its
/// descendants into `nodes`.
fn parse_node(
    spec: &str,
    options: &ParseOptions,
    nodes: &mut Vec<ListNode>,
) -> Result<NodeId, SpecError> {
    // The head ends at the first ';', escaped or not
    let (head, children) = spec.split_once(';').unwrap_or((spec, ""));

    let mut fields = head.split(':');
    let number = parse_number(fields.next().unwrap_or(""), NumberField::Number, options)?;
    let length = parse_number(fields.next().unwrap_or(""), NumberField::Length, options)?;

    let mut node = ListNode::new(
        number,
        usize::try_from(length).unwrap_or(0),
        options.defaults.numbering_style(),
        options.defaults.closure.clone(),
    );
    for option in fields {
        apply_option(&mut node, option);
    }

    node.children = parse_children(children, options, nodes)?;

    debug!(
        number = node.number,
        length = node.length,
        style = ?node.style,
        children = node.children.len(),
        "parsed list"
    );
    Ok(ListTree::push(nodes, node))
}

fn parse_number(text: &str, field: NumberField, options: &ParseOptions) -> Result<i64, SpecError> {
    match text.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) if options.strict => Err(SpecError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
        Err(_) => {
            warn!(%field, value = text, "malformed number, using 0");
            Ok(0)
        }
    }
}

fn apply_option(node: &mut ListNode, option: &str) {
    let (key, value) = option.split_once('=').unwrap_or((option, ""));
    match key {
        "type" => {
            node.style = NumberingStyle::lookup(value).unwrap_or_else(|| {
                warn!(value, "unknown list type, using number");
                NumberingStyle::Arabic
            });
        }
        "closure" => node.closure = value.to_string(),
        "leftpad" => node.left_pad = true,
        _ => {
            warn!(key, "ignoring unknown option");
        }
    }
}

/// Parse the bracketed sub-specifications of a children section.
///
/// Only bracket depth is tracked, so `[` and `{` are interchangeable and may
/// be closed by either `]` or `}`. A backslash hides the next character from
/// the scan but both are kept in the text handed to the nested parse.
fn parse_children(
    section: &str,
    options: &ParseOptions,
    nodes: &mut Vec<ListNode>,
) -> Result<Vec<Attachment>, SpecError> {
    let mut children = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    let mut escaped = false;

    for (i, ch) in section.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            ';' if depth == 0 => start = None,
            '[' | '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            ']' | '}' => {
                if depth == 0 {
                    return Err(SpecError::UnopenedBracket { offset: i });
                }
                depth -= 1;
                if depth == 0 {
                    if let Some(open) = start.take() {
                        // Brackets are one byte wide
                        let id = parse_node(&section[open + 1..i], options, nodes)?;
                        children.push(Attachment {
                            item: nodes[id.index()].number,
                            node: id,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        return Err(SpecError::UnclosedBracket { depth });
    }
    Ok(children)
}
