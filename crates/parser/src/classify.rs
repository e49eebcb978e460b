//! Line Classification
//!
//! Turns one trimmed comment line into a [`LineEvent`]. Rules are checked in
//! priority order: noise, `name +qty`, bare name, then anything else as a
//! continuation of the previous name.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use group_order_core::RawValue;

/// Tokens that make up a whole line of UI chrome copied with the comments.
pub const NOISE_WORDS: [&str; 2] = ["回覆", "翻譯年糕"];

/// Marker appended to edited comments.
pub const EDITED_MARKER: &str = "已編輯";

/// Characters allowed in a buyer name.
const NAME_CHARS: &str = r"[\x{4e00}-\x{9fa5}\x{00C0}-\x{024F}A-Za-z\s·._-]";

struct Patterns {
    name_plus: Regex,
    name_line: Regex,
    pure_num: Regex,
    letter_plus: Regex,
    relative_time: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        name_plus: Regex::new(&format!(r"^({}+?)\s+\+\s*([0-9]+)\s*$", NAME_CHARS)).unwrap(),
        name_line: Regex::new(&format!(r"^{}+$", NAME_CHARS)).unwrap(),
        pure_num: Regex::new(r"^\s*\+?\s*([0-9]+)\s*$").unwrap(),
        letter_plus: Regex::new(r"[A-Za-z]\s*\+\s*[0-9]+").unwrap(),
        relative_time: Regex::new(r"^[0-9]+\s*(天|日|週|周|小時|分鐘)$").unwrap(),
    })
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineEvent {
    /// Blank lines, reply/translate markers, timestamps, edited comments
    Noise,
    /// `name +qty` on one line
    NameWithQuantity { name: String, qty: u64 },
    /// A line made only of name characters
    NameOnly { name: String },
    /// Order detail for the most recent name
    Continuation { line: String },
}

/// Whether a trimmed line should be skipped entirely.
pub fn is_noise(line: &str) -> bool {
    line.is_empty()
        || line.contains(EDITED_MARKER)
        || NOISE_WORDS.contains(&line)
        || patterns().relative_time.is_match(line)
}

/// Classify one line. The line is trimmed first.
pub fn classify(line: &str) -> LineEvent {
    let line = line.trim();
    if is_noise(line) {
        return LineEvent::Noise;
    }

    let p = patterns();
    if let Some(caps) = p.name_plus.captures(line) {
        // Digit runs too long for u64 fall through to the continuation rule.
        if let Ok(qty) = caps[2].parse::<u64>() {
            return LineEvent::NameWithQuantity {
                name: caps[1].trim().to_string(),
                qty,
            };
        }
    }

    if p.name_line.is_match(line) {
        return LineEvent::NameOnly {
            name: line.to_string(),
        };
    }

    LineEvent::Continuation {
        line: line.to_string(),
    }
}

/// Read a continuation line as a count (`3`, `+3`) or keep its text.
pub fn interpret_continuation(line: &str) -> RawValue {
    let p = patterns();
    if !p.letter_plus.is_match(line) {
        if let Some(qty) = p
            .pure_num
            .captures(line)
            .and_then(|caps| caps[1].parse::<u64>().ok())
        {
            return RawValue::Int(qty);
        }
    }
    RawValue::Text(line.trim().to_string())
}
