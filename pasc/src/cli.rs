use std::{
    io::{IsTerminal, Write},
    time::Duration,
};
use pas_core::environment::prelude::Environment;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

pub(crate) fn print_compiling(text: &str) {
    print_colourful_prefix("Compiling", Color::Cyan, text);
}

pub(crate) fn print_compiled(duration: Duration) {
    print_colourful_prefix("Compiled", Color::Green, &format!("in {}", seconds(duration)))
}

pub(crate) fn print_written(text: &str) {
    print_colourful_prefix("Written", Color::Green, text)
}

pub(crate) fn print_interrupted() {
    print_colourful_prefix("Interrupted", Color::Red, "by Ctrl-C")
}

/// Symbol and memory tables, in declaration order.
pub(crate) fn print_tables(environment: &Environment) {
    println!("Symbols:");
    for (name, value_type) in environment.symbols() {
        println!("  {name}: {value_type}");
    }

    println!("Memory:");
    for (name, value) in environment.memory() {
        println!("  {name} = {value}");
    }
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    buffer
        .set_color(
            ColorSpec::new()
                .set_intense(true)
                .set_bold(true)
                .set_fg(Some(color)),
        )
        .expect("print_colourful_prefix");
    write!(buffer, "{prefix: >11}").expect("print_colourful_prefix");
    buffer
        .set_color(&ColorSpec::new())
        .expect("print_colourful_prefix");
    writeln!(buffer, " {text}").expect("print_colourful_prefix");
    buffer_writer.print(&buffer).expect("print_colourful_prefix");
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

fn colour_forced() -> bool {
    std::env::var("FORCE_COLOR").is_ok_and(|force| !force.is_empty())
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
