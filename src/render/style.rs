//! Print-only stylesheet.

/// Element id of the container holding a print document.
pub const PRINT_CONTAINER_ID: &str = "print-container";

/// Builds the `@media print` block that hides everything on the page except
/// the print container.
///
/// Each line of `extra` is appended inside the block.
pub fn print_stylesheet(container_id: &str, extra: Option<&str>) -> String {
    let mut css = String::from("@media print {\n");
    css.push_str("  body * {\n    visibility: hidden;\n  }\n");
    css.push_str(&format!(
        "  #{container_id}, #{container_id} * {{\n    visibility: visible;\n  }}\n"
    ));
    css.push_str(&format!(
        "  #{container_id} {{\n    position: absolute;\n    left: 0;\n    top: 0;\n    width: 100%;\n  }}\n"
    ));
    css.push_str("  @page {\n    size: auto;\n    margin: 20mm;\n  }\n");
    for line in extra.into_iter().flat_map(str::lines) {
        let line = line.trim();
        if !line.is_empty() {
            css.push_str("  ");
            css.push_str(line);
            css.push('\n');
        }
    }
    css.push('}');
    css
}
