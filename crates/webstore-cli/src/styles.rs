//! Colors for `--help` and usage errors.

use anstyle::{AnsiColor, Style};

const fn ansi(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(anstyle::Color::Ansi(color)))
}

pub fn help_styles() -> clap::builder::Styles {
    let heading = ansi(AnsiColor::Yellow).bold().underline();
    let accent = ansi(AnsiColor::BrightBlue);

    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(accent.bold())
        .placeholder(accent.italic())
        .error(ansi(AnsiColor::Red).bold())
        .valid(ansi(AnsiColor::Green))
        .invalid(ansi(AnsiColor::Red))
}
