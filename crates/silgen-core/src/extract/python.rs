//! Python implementation of the interface extractor, built on tree-sitter.

use std::path::Path;

use tree_sitter::{Node, Parser};

use super::{ClassInterface, MethodDescriptor, SourceAnalyzer};
use crate::error::{Error, Result};

/// Extracts class interfaces from Python source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonAnalyzer;

impl PythonAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }
}

impl SourceAnalyzer for PythonAnalyzer {
    fn analyze(&self, source: &str, path: &Path) -> Result<ClassInterface> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| Error::Toolchain(format!("failed to load Python grammar: {e}")))?;

        let tree = parser.parse(source, None).ok_or_else(|| Error::Malformed {
            path: path.to_path_buf(),
            message: "parser returned no tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::Malformed {
                path: path.to_path_buf(),
                message: "invalid Python syntax".to_string(),
            });
        }

        let src = source.as_bytes();

        // Only top-level classes qualify; nested and function-local class
        // definitions are not module shapes we can wrap.
        let mut cursor = root.walk();
        let classes: Vec<Node<'_>> = root
            .children(&mut cursor)
            .filter_map(class_definition)
            .collect();

        match classes.as_slice() {
            [] => Err(Error::NoClass(path.to_path_buf())),
            [class] => Ok(ClassInterface {
                class_name: field_text(*class, "name", src).to_string(),
                methods: collect_methods(*class, src),
            }),
            many => Err(Error::MultipleClasses {
                path: path.to_path_buf(),
                count: many.len(),
            }),
        }
    }
}

/// Resolve a node to the class definition it declares, unwrapping a
/// decorated definition, or `None` if it declares something else.
fn class_definition(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "class_definition" => Some(node),
        "decorated_definition" => node
            .child_by_field_name("definition")
            .filter(|def| def.kind() == "class_definition"),
        _ => None,
    }
}

/// Collect the class's direct method definitions in source order.
fn collect_methods(class: Node<'_>, src: &[u8]) -> Vec<MethodDescriptor> {
    let Some(body) = class.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut methods = Vec::new();
    let mut cursor = body.walk();

    for child in body.children(&mut cursor) {
        match child.kind() {
            "function_definition" => methods.push(method_descriptor(child, &[], src)),
            "decorated_definition" => {
                let Some(def) = child.child_by_field_name("definition") else {
                    continue;
                };
                if def.kind() != "function_definition" {
                    continue;
                }

                let mut dec_cursor = child.walk();
                let decorators: Vec<String> = child
                    .children(&mut dec_cursor)
                    .filter(|n| n.kind() == "decorator")
                    .map(|n| decorator_name(n, src))
                    .collect();

                methods.push(method_descriptor(def, &decorators, src));
            }
            _ => {}
        }
    }

    methods
}

fn method_descriptor(def: Node<'_>, decorators: &[String], src: &[u8]) -> MethodDescriptor {
    MethodDescriptor {
        name: field_text(def, "name", src).to_string(),
        line: def.start_position().row + 1,
        decorators: decorators.to_vec(),
    }
}

/// Recover a readable decorator name from its expression node.
///
/// A plain reference yields its name, an attribute chain the dot-joined
/// chain, a call the name of the called target (arguments ignored). Anything
/// else falls back to the node's structural dump.
fn decorator_name(decorator: Node<'_>, src: &[u8]) -> String {
    let Some(expr) = decorator.named_child(0) else {
        return decorator.to_sexp();
    };
    expression_name(expr, src)
}

fn expression_name(expr: Node<'_>, src: &[u8]) -> String {
    match expr.kind() {
        "identifier" | "attribute" => node_text(expr, src).to_string(),
        "call" => expr
            .child_by_field_name("function")
            .map(|func| expression_name(func, src))
            .unwrap_or_else(|| expr.to_sexp()),
        _ => expr.to_sexp(),
    }
}

fn node_text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn field_text<'a>(node: Node<'_>, field: &str, src: &'a [u8]) -> &'a str {
    node.child_by_field_name(field)
        .map(|n| node_text(n, src))
        .unwrap_or("")
}
