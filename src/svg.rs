use std::fmt::Write as _;

use crate::form::FormState;
use crate::validate::Field;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 36;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub error: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                error: "#f85149",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                error: "#cf222e",
            },
        }
    }
}

// Utilities for building SVG content

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Split a row into (key, dot leader, value) padded to `align_width`.
pub fn build_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    /// `placeholder` rows show the hint text dimmed instead of a value.
    Row {
        key: String,
        value: String,
        placeholder: bool,
    },
    Error(String),
}

fn form_lines(form: &FormState) -> Vec<Line> {
    let mut lines = vec![Line::Header("agecalc".to_string())];

    for field in Field::ALL {
        let raw = form.input.get(field);
        let (value, placeholder) = if raw.is_empty() {
            (field.placeholder().to_string(), true)
        } else {
            (raw.to_string(), false)
        };
        lines.push(Line::Row {
            key: field.label().to_string(),
            value,
            placeholder,
        });
        if let Some(err) = form.visible_error(field) {
            lines.push(Line::Error(err.to_string()));
        }
    }

    lines.push(Line::Blank);
    lines.push(Line::Header("- Age".to_string()));

    let parts = form.evaluation.age.display_parts();
    for (label, value) in ["Years", "Months", "Days"].into_iter().zip(parts) {
        lines.push(Line::Row {
            key: label.to_string(),
            value,
            placeholder: false,
        });
    }

    lines
}

/// Render the form as a themed SVG card.
pub fn generate_svg(form: &FormState, theme: Theme) -> String {
    let colors = theme.colors();
    let lines = form_lines(form);

    let align_width = lines
        .iter()
        .map(|line| match line {
            Line::Row { key, value, .. } => key.chars().count() + 2 + value.chars().count(),
            Line::Error(msg) => msg.chars().count() + 2,
            Line::Header(_) | Line::Blank => 0,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_COL_CHARS);

    let x = LEFT_PADDING;
    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                let _ = writeln!(
                    tspans,
                    r#"<tspan x="{x}" y="{y}">{}</tspan>"#,
                    escape_xml(&build_header_line(label, align_width))
                );
            }
            Line::Error(msg) => {
                let _ = writeln!(
                    tspans,
                    r#"<tspan x="{x}" y="{y}" class="error">  {}</tspan>"#,
                    escape_xml(msg)
                );
            }
            Line::Row {
                key,
                value,
                placeholder,
            } => {
                let (k, d, v) = build_row(key, value, align_width);
                let value_class = if *placeholder { "cc" } else { "value" };
                let _ = writeln!(
                    tspans,
                    r#"<tspan x="{x}" y="{y}" class="cc">. </tspan><tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="{value_class}">{}</tspan>"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                );
            }
        }
    }

    let w = LEFT_PADDING + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let h = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
.error    {{ fill: {error}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{body}
</text>

</svg>
"#,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        error = colors.error,
        body = tspans
    )
}
