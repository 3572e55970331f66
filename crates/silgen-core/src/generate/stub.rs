//! Binding-stub generation.
//!
//! Renders the pybind11 C++ translation unit with one no-op exported
//! function per extracted method. The registration block is emitted in
//! declaration order so repeated runs over the same source are byte-stable.

use rustc_hash::FxHashSet;

use crate::extract::ClassInterface;
use crate::naming::ModuleName;

/// Render the binding stub for an extracted class interface.
///
/// Dunder methods are skipped; same-named methods collapse to one emitted
/// function, first declaration wins. The bodies are intentionally empty
/// placeholders for the developer to fill in.
pub fn render(interface: &ClassInterface, module: &ModuleName) -> String {
    let mut text = String::new();

    text.push_str("#include <pybind11/numpy.h>\n");
    text.push_str("#include <pybind11/pybind11.h>\n\n");

    text.push_str("namespace py = pybind11;\n\n");

    text.push_str("void initialize(void) {}\n\n");

    let mut seen = FxHashSet::default();
    let mut exported: Vec<&str> = Vec::new();

    text.push_str(&format!("// Class: {}\n", interface.class_name));
    for method in interface.exported_methods() {
        if !seen.insert(method.name.as_str()) {
            continue;
        }
        exported.push(&method.name);

        text.push_str(&format!("// Method: {}\n", method.name));
        text.push_str(&format!("void {}(void) {{}}\n\n", method.name));
    }

    text.push_str(&format!("PYBIND11_MODULE({module}, m) {{\n"));
    text.push_str("    m.def(\"initialize\", &initialize, \"Initialize the module\");\n");
    for name in exported {
        text.push_str(&format!(
            "    m.def(\"{name}\", &{name}, \"{name} method\");\n"
        ));
    }
    text.push_str("}\n");

    text
}
