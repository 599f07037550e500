//! Coloured status messages for the terminal.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn pinta<T: fmt::Display>(color: &str, icono: &str, msg: T) -> String {
    format!("{color}{BOLD}{icono} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", pinta("\x1b[34m", "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", pinta("\x1b[32m", "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", pinta("\x1b[33m", "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", pinta("\x1b[31m", "❌", msg));
}
