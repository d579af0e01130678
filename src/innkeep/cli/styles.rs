use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
