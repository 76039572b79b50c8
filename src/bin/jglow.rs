use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use crossterm::style::{Attribute, Attributes, Color as AnsiColor, ContentStyle};
use is_terminal::IsTerminal;
use jsonglow::JsonText;
use ratatui::style::{Color, Modifier, Style};

/// A JSON syntax highlighter for the terminal.
///
/// jglow reads JSON from stdin or files and prints it colorized, with
/// member names, literals, and punctuation each styled separately.
/// Malformed input is reported with its exact position.
#[derive(Parser, Debug)]
#[command(name = "jglow")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// When to colorize output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("jglow: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let colorize = match args.color {
        ColorArg::Always => true,
        ColorArg::Never => false,
        ColorArg::Auto => io::stdout().is_terminal(),
    };

    // Read input
    let inputs = if args.files.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        vec![buffer]
    } else {
        let mut contents = Vec::with_capacity(args.files.len());
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            contents.push(content);
        }
        contents
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for input in inputs {
        let mut json = JsonText::new(input);
        let text = json.build()?;

        for line in &text.lines {
            for span in &line.spans {
                if colorize {
                    let styled = content_style(span.style).apply(span.content.as_ref());
                    write!(out, "{}", styled)?;
                } else {
                    write!(out, "{}", span.content)?;
                }
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

fn content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::new();
    out.foreground_color = style.fg.map(ansi_color);
    out.background_color = style.bg.map(ansi_color);

    let mut attributes = Attributes::default();
    if style.add_modifier.contains(Modifier::BOLD) {
        attributes.set(Attribute::Bold);
    }
    if style.add_modifier.contains(Modifier::DIM) {
        attributes.set(Attribute::Dim);
    }
    if style.add_modifier.contains(Modifier::ITALIC) {
        attributes.set(Attribute::Italic);
    }
    if style.add_modifier.contains(Modifier::UNDERLINED) {
        attributes.set(Attribute::Underlined);
    }
    out.attributes = attributes;
    out
}

fn ansi_color(color: Color) -> AnsiColor {
    match color {
        Color::Reset => AnsiColor::Reset,
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::DarkRed,
        Color::Green => AnsiColor::DarkGreen,
        Color::Yellow => AnsiColor::DarkYellow,
        Color::Blue => AnsiColor::DarkBlue,
        Color::Magenta => AnsiColor::DarkMagenta,
        Color::Cyan => AnsiColor::DarkCyan,
        Color::Gray => AnsiColor::Grey,
        Color::DarkGray => AnsiColor::DarkGrey,
        Color::LightRed => AnsiColor::Red,
        Color::LightGreen => AnsiColor::Green,
        Color::LightYellow => AnsiColor::Yellow,
        Color::LightBlue => AnsiColor::Blue,
        Color::LightMagenta => AnsiColor::Magenta,
        Color::LightCyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::Rgb(r, g, b) => AnsiColor::Rgb { r, g, b },
        Color::Indexed(i) => AnsiColor::AnsiValue(i),
    }
}
