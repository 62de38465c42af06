//! Built-in two-pane editor page served at `/`.
//!
//! The script selectors are generated from the registry so the page never
//! offers a script the server does not know about.

use akkhara_core::registry::Registry;
use akkhara_core::script::ScriptId;

const TEMPLATE: &str = include_str!("../static/index.html");

const INPUT_OPTIONS: &str = "{{input_options}}";
const OUTPUT_OPTIONS: &str = "{{output_options}}";

fn options(scripts: &[ScriptId]) -> String {
    scripts
        .iter()
        .map(|s| format!(r#"<option value="{}">{}</option>"#, s.token(), s.label()))
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Render the built-in page: every script is offered as input, only scripts
/// that something converts into are offered as output.
pub fn render_builtin(registry: &Registry) -> String {
    TEMPLATE
        .replace(INPUT_OPTIONS, &options(&ScriptId::ALL))
        .replace(OUTPUT_OPTIONS, &options(&registry.destinations()))
}
