//! Tagged status lines. `console` handles terminal detection and platform
//! color support, so the tags degrade to plain text when piped.

use std::fmt::Display;

use console::style;

pub fn info(msg: impl Display) {
    println!("{} {msg}", style("[INFO]").cyan());
}

pub fn success(msg: impl Display) {
    println!("{} {msg}", style("[SUCCESS]").green());
}

pub fn warning(msg: impl Display) {
    println!("{} {msg}", style("[WARNING]").yellow());
}

pub fn error(msg: impl Display) {
    println!("{} {msg}", style("[ERROR]").red());
}
