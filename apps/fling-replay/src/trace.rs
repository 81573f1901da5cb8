//! Text pointer traces.
//!
//! One event per line, fields separated by whitespace:
//!
//! ```text
//! # comment
//! down  x y t_ms
//! move  x y t_ms
//! up    x y t_ms [button]
//! tick  elapsed_ms
//! ```
//!
//! Buttons use toolkit numbering (1 = primary) and default to primary.

use anyhow::{anyhow, bail, Context, Result};
use kinetic_core::{Point, Timestamp, MICROS_PER_MILLI};
use kinetic_foundation::PointerButton;
use kinetic_ui::KineticEvent;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceLine {
    pub line_no: usize,
    pub event: KineticEvent,
}

pub fn load(path: &Path) -> Result<Vec<TraceLine>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid trace {}", path.display()))
}

pub fn parse(text: &str) -> Result<Vec<TraceLine>> {
    let mut out = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = parse_event(trimmed).with_context(|| format!("line {line_no}: {trimmed}"))?;
        out.push(TraceLine { line_no, event });
    }
    Ok(out)
}

fn parse_event(line: &str) -> Result<KineticEvent> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (kind, args) = fields
        .split_first()
        .ok_or_else(|| anyhow!("empty line"))?;

    match *kind {
        "down" | "move" | "up" => {
            let extra = if *kind == "up" { 1 } else { 0 };
            if args.len() < 3 || args.len() > 3 + extra {
                bail!("`{kind}` expects x y t_ms{}", if extra == 1 { " [button]" } else { "" });
            }
            let position = Point::new(parse_field(args[0], "x")?, parse_field(args[1], "y")?);
            let millis: u64 = parse_field(args[2], "t_ms")?;
            let timestamp = millis
                .checked_mul(MICROS_PER_MILLI)
                .map(Timestamp::from_micros)
                .ok_or_else(|| anyhow!("t_ms {millis} is out of range"))?;
            let button = match args.get(3) {
                Some(number) => {
                    let number: u32 = parse_field(number, "button")?;
                    PointerButton::from_number(number)
                        .ok_or_else(|| anyhow!("unknown button {number}"))?
                }
                None => PointerButton::Primary,
            };
            Ok(match *kind {
                "down" => KineticEvent::PointerDown {
                    position,
                    timestamp,
                    button,
                },
                "move" => KineticEvent::PointerMove {
                    position,
                    timestamp,
                },
                _ => KineticEvent::PointerUp {
                    position,
                    timestamp,
                    button,
                },
            })
        }
        "tick" => {
            if args.len() != 1 {
                bail!("`tick` expects elapsed_ms");
            }
            Ok(KineticEvent::tick(parse_field(args[0], "elapsed_ms")?))
        }
        other => bail!("unknown event `{other}`"),
    }
}

fn parse_field<T>(value: &str, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid {name} `{value}`"))
}
