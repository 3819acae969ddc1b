//! Translation of formatter settings into a jsonnetfmt argument vector.

use tower_lsp::lsp_types::FormattingOptions;

use crate::config::FormatterSettings;

/// Build the argument vector for one jsonnetfmt invocation.
///
/// Pure function of the request's formatting options and a settings
/// snapshot; flag order is fixed so invocations are reproducible. The
/// trailing `-` tells jsonnetfmt to read source from stdin.
///
/// Values are passed through without validation; jsonnetfmt rejects
/// anything it does not understand.
pub fn build_args(options: &FormattingOptions, settings: &FormatterSettings) -> Vec<String> {
    let indent = if settings.indent == 0 {
        options.tab_size
    } else {
        settings.indent
    };

    let mut args = vec![
        "--indent".to_string(),
        indent.to_string(),
        "--max-blank-lines".to_string(),
        settings.max_blank_lines.to_string(),
        "--string-style".to_string(),
        first_char(&settings.string_style),
        "--comment-style".to_string(),
        first_char(&settings.comment_style),
    ];

    args.push(toggle(
        settings.pretty_field_names,
        "--pretty-field-names",
        "--no-pretty-field-names",
    ));
    args.push(toggle(settings.pad_arrays, "--pad-arrays", "--no-pad-arrays"));
    args.push(toggle(settings.pad_objects, "--pad-objects", "--no-pad-objects"));
    args.push(toggle(settings.sort_imports, "--sort-imports", "--no-sort-imports"));

    args.push("-".to_string());
    args
}

/// Style options are single-character codes; longer strings keep only the
/// first character, an empty string passes through empty.
fn first_char(style: &str) -> String {
    style.chars().next().map(String::from).unwrap_or_default()
}

fn toggle(enabled: bool, on: &str, off: &str) -> String {
    if enabled { on.to_string() } else { off.to_string() }
}
