use std::io::{self, Write};

use super::show::DEFAULT_TITLE;

/// Write usage help for the menu. Shown when a menu is requested with no
/// options.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    let text = format!(
        "\
NAME
    show_menu - pick one option from a list with the arrow keys

SYNOPSIS
    show_menu(options, title = \"{DEFAULT_TITLE}\", return_index = false)

PARAMETERS
    options         Labels to choose from. At least one is required.
    title           Line shown above the options.
    return_index    Return the zero-based index instead of the label.

KEYS
    Up / Down       Move the selection (wraps around at either end)
    Enter           Confirm the highlighted option
    Esc             Cancel without a selection

EXAMPLES
    show_menu(&[\"Red\", \"Green\", \"Blue\"], Some(\"Pick a color\"), false)
    pickmenu --title \"Pick a color\" Red Green Blue
    ls | pickmenu --index
"
    );
    out.write_all(text.as_bytes())?;
    out.flush()
}
