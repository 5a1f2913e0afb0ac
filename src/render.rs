//! Plain-text and JSON views of the form.

use std::fmt::Write as _;

use crate::error::Result;
use crate::form::FormState;
use crate::validate::Field;

const BOX_WIDTH: usize = 6;
const RULE_WIDTH: usize = 40;

/// Input boxes with any visible errors, a rule, then the three result lines.
pub fn render_text(form: &FormState) -> String {
    let mut out = String::new();

    for field in Field::ALL {
        let raw = form.input.get(field);
        let shown = if raw.is_empty() { field.placeholder() } else { raw };
        let _ = write!(out, "{:<5} [{:<width$}]", field.label(), shown, width = BOX_WIDTH);
        if let Some(err) = form.visible_error(field) {
            let _ = write!(out, "  ! {err}");
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    let [years, months, days] = form.evaluation.age.display_parts();
    let _ = writeln!(out, "{years} years");
    let _ = writeln!(out, "{months} months");
    let _ = writeln!(out, "{days} days");

    out
}

/// The form as pretty-printed JSON.
pub fn render_json(form: &FormState) -> Result<String> {
    Ok(serde_json::to_string_pretty(form)?)
}
