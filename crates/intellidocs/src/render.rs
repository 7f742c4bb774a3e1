use colored::Colorize;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Render backend Markdown for terminal display.
///
/// Parsing is delegated to comrak; this pass only maps the tree onto
/// ANSI-styled text. Constructs without a dedicated style fall back to
/// their literal text.
pub fn markdown(source: &str) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &Options::default());

    let mut out = String::new();
    for child in root.children() {
        render_block(child, &mut out, 0);
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_block<'a>(node: &'a AstNode<'a>, out: &mut String, indent: usize) {
    let pad = "  ".repeat(indent);

    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            let text = inline_text(node);
            let styled = match heading.level {
                1 | 2 => text.bold().cyan().to_string(),
                _ => text.bold().to_string(),
            };
            out.push_str(&format!("{pad}{styled}\n\n"));
        }
        NodeValue::Paragraph => {
            out.push_str(&format!("{pad}{}\n\n", inline_text(node)));
        }
        NodeValue::List(list) => {
            let mut index = list.start;
            for item in node.children() {
                let marker = match list.list_type {
                    ListType::Bullet => "•".to_string(),
                    ListType::Ordered => {
                        let marker = format!("{index}.");
                        index += 1;
                        marker
                    }
                };
                render_item(item, out, indent, &marker);
            }
            out.push('\n');
        }
        NodeValue::CodeBlock(block) => {
            for line in block.literal.lines() {
                out.push_str(&format!("{pad}    {line}\n"));
            }
            out.push('\n');
        }
        NodeValue::BlockQuote => {
            for child in node.children() {
                out.push_str(&format!(
                    "{pad}{} {}\n",
                    ">".bright_black(),
                    inline_text(child)
                ));
            }
            out.push('\n');
        }
        NodeValue::ThematicBreak => {
            out.push_str(&format!("{pad}{}\n\n", "-".repeat(40).bright_black()));
        }
        NodeValue::HtmlBlock(block) => {
            out.push_str(&block.literal);
            out.push('\n');
        }
        _ => {
            let text = inline_text(node);
            if !text.trim().is_empty() {
                out.push_str(&format!("{pad}{text}\n\n"));
            }
        }
    }
}

fn render_item<'a>(item: &'a AstNode<'a>, out: &mut String, indent: usize, marker: &str) {
    let pad = "  ".repeat(indent);
    let mut first = true;

    for child in item.children() {
        // Nested structure keeps its own block rendering, one level deeper.
        if matches!(
            child.data.borrow().value,
            NodeValue::List(_) | NodeValue::CodeBlock(_)
        ) {
            render_block(child, out, indent + 1);
            continue;
        }

        if first {
            out.push_str(&format!("{pad}{} {}\n", marker.yellow(), inline_text(child)));
            first = false;
        } else {
            out.push_str(&format!("{pad}  {}\n", inline_text(child)));
        }
    }
}

fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_inline(node, &mut text);
    text
}

fn collect_inline<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(literal) => out.push_str(literal),
            NodeValue::Code(code) => out.push_str(&code.literal.cyan().to_string()),
            NodeValue::Strong => out.push_str(&inline_text(child).bold().to_string()),
            NodeValue::Emph => out.push_str(&inline_text(child).italic().to_string()),
            NodeValue::Link(link) => {
                let label = inline_text(child);
                if label.is_empty() || label == link.url {
                    out.push_str(&link.url.cyan().underline().to_string());
                } else {
                    out.push_str(&format!("{} ({})", label, link.url.cyan().underline()));
                }
            }
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
            NodeValue::HtmlInline(literal) => out.push_str(literal),
            _ => collect_inline(child, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_strips_strong_markers() {
        let rendered = markdown("**hello**");

        assert!(rendered.contains("hello"));
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_markdown_strips_heading_markers() {
        let rendered = markdown("# Project Title");

        assert!(rendered.contains("Project Title"));
        assert!(!rendered.contains('#'));
    }

    #[test]
    fn test_markdown_bullets() {
        let rendered = markdown("- first\n- second");

        assert!(rendered.contains('•'));
        assert!(rendered.contains("first"));
        assert!(rendered.contains("second"));
    }

    #[test]
    fn test_markdown_ordered_list_numbers() {
        let rendered = markdown("1. first\n2. second");

        assert!(rendered.contains("1."));
        assert!(rendered.contains("2."));
    }

    #[test]
    fn test_markdown_inline_code_without_backticks() {
        let rendered = markdown("Run `cargo run` locally.");

        assert!(rendered.contains("cargo run"));
        assert!(!rendered.contains('`'));
    }

    #[test]
    fn test_markdown_code_block_indented() {
        let rendered = markdown("```\nlet x = 1;\n```");

        assert!(rendered.contains("    let x = 1;"));
    }

    #[test]
    fn test_markdown_link_shows_target() {
        let rendered = markdown("[docs](https://example.com)");

        assert!(rendered.contains("docs"));
        assert!(rendered.contains("https://example.com"));
    }

    #[test]
    fn test_markdown_blockquote() {
        let rendered = markdown("> quoted line");

        assert!(rendered.contains("quoted line"));
    }

    #[test]
    fn test_markdown_empty_input() {
        assert_eq!(markdown(""), "");
    }

    #[test]
    fn test_markdown_ends_with_single_newline() {
        let rendered = markdown("# Title\n\nBody paragraph.");

        assert!(rendered.ends_with('\n'));
        assert!(!rendered.ends_with("\n\n"));
    }
}
