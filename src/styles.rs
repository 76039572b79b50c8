use ratatui::style::{Color, Style};

/// The style table driving the builder: one slot per syntactic category.
///
/// `Default` fills the documented palette - structural punctuation in a
/// muted tone, member names in an accent tone, strings warm, numbers and
/// booleans cool:
///
/// | slot       | default                |
/// |------------|------------------------|
/// | `braces`   | dark gray              |
/// | `brackets` | dark gray              |
/// | `member`   | blue                   |
/// | `colon`    | yellow                 |
/// | `comma`    | dark gray              |
/// | `string`   | red                    |
/// | `number`   | green                  |
/// | `boolean`  | green                  |
/// | `null`     | dark gray              |
///
/// The table is plain data: it is supplied per render build and never
/// mutates the tree it styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonTextStyles {
    pub braces: Style,
    pub brackets: Style,
    pub member: Style,
    pub colon: Style,
    pub comma: Style,
    pub string: Style,
    pub number: Style,
    pub boolean: Style,
    pub null: Style,
}

impl Default for JsonTextStyles {
    fn default() -> Self {
        Self {
            braces: Style::new().fg(Color::DarkGray),
            brackets: Style::new().fg(Color::DarkGray),
            member: Style::new().fg(Color::Blue),
            colon: Style::new().fg(Color::Yellow),
            comma: Style::new().fg(Color::DarkGray),
            string: Style::new().fg(Color::Red),
            number: Style::new().fg(Color::Green),
            boolean: Style::new().fg(Color::Green),
            null: Style::new().fg(Color::DarkGray),
        }
    }
}
