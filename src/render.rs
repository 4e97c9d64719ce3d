use crate::config::Config;
use crate::node::{ListTree, NodeId};
use crate::numeral;

/// Settings that change how lists are laid out
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Added to the indent for every nesting level
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::compiled_default())
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            indent: config.render.indent.clone(),
        }
    }
}

/// Render each tree in turn into one block of text.
pub fn render(trees: &[ListTree], options: &RenderOptions) -> String {
    let mut out = String::new();
    for tree in trees {
        render_tree(tree, options, &mut out);
    }
    out
}

/// Render a single tree, starting at its root.
pub fn render_tree(tree: &ListTree, options: &RenderOptions, out: &mut String) {
    list_to_text(tree, tree.root(), "", &options.indent, out);
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Write the items of `id`. The first item continues whatever line the caller
/// left open; every later item starts with `indent`.
fn list_to_text(tree: &ListTree, id: NodeId, indent: &str, step: &str, out: &mut String) {
    let node = tree.node(id);
    let mut indent = indent.to_string();

    // A top-level list is labelled with its own number
    if indent.is_empty() {
        out.push_str(&numeral::format(node.style, node.number));
        out.push_str(&node.closure);
        out.push(' ');
        indent.push_str(step);
    }

    let length = node.length as i64;
    let max_len = numeral::longest_width(node.style, length);

    for item in 1..=length {
        if item != 1 {
            out.push_str(&indent);
        }

        let marker = numeral::format(node.style, item);
        let padding = spaces(max_len.saturating_sub(numeral::width(&marker)));
        if node.left_pad {
            out.push_str(&padding);
        }
        out.push_str(&marker);
        out.push_str(&node.closure);
        out.push(' ');
        if !node.left_pad {
            out.push_str(&padding);
        }

        match tree.child_for_item(id, item) {
            Some(child) => {
                // Line the nested markers up with the text after our widest marker
                let nested = format!("{indent}{step}{}", spaces(max_len.saturating_sub(1)));
                list_to_text(tree, child, &nested, step, out);
            }
            None => out.push('\n'),
        }
    }
}
