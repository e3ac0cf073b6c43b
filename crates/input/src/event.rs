use std::str::FromStr;

/// Keys the viewer reacts to. Everything else collapses into [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// Numeric keypad `+`.
    NumpadPlus,
    /// Numeric keypad `-`.
    NumpadMinus,
    Other,
}

/// A raw input event, already stripped of platform detail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close or any other request to quit.
    Quit,
    /// A key went down. Releases and repeats are not reported.
    KeyDown(Key),
    /// Relative pointer motion in pixels since the previous motion event.
    /// Positive `dy` points down the screen.
    MouseMotion { dx: f32, dy: f32 },
    /// Anything the viewer ignores.
    Other,
}

/// Errors from parsing a textual event script.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseEventError {
    #[error("empty event token")]
    Empty,
    #[error("unknown event token `{0}`")]
    Unknown(String),
    #[error("invalid motion delta in `{token}`: {reason}")]
    BadDelta { token: String, reason: String },
}

impl FromStr for InputEvent {
    type Err = ParseEventError;

    /// Parse one script token:
    /// `+`, `-`, `esc`, `quit`, `other`, `dy=<f32>` or `dx=<f32>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseEventError::Empty);
        }

        if let Some((axis, value)) = token.split_once('=') {
            let delta: f32 = value.trim().parse().map_err(|e: std::num::ParseFloatError| {
                ParseEventError::BadDelta {
                    token: token.to_string(),
                    reason: e.to_string(),
                }
            })?;
            if !delta.is_finite() {
                return Err(ParseEventError::BadDelta {
                    token: token.to_string(),
                    reason: "delta must be finite".to_string(),
                });
            }
            return match axis.trim() {
                "dy" => Ok(InputEvent::MouseMotion { dx: 0.0, dy: delta }),
                "dx" => Ok(InputEvent::MouseMotion { dx: delta, dy: 0.0 }),
                _ => Err(ParseEventError::Unknown(token.to_string())),
            };
        }

        match token.to_ascii_lowercase().as_str() {
            "+" | "plus" => Ok(InputEvent::KeyDown(Key::NumpadPlus)),
            "-" | "minus" => Ok(InputEvent::KeyDown(Key::NumpadMinus)),
            "esc" | "escape" => Ok(InputEvent::KeyDown(Key::Escape)),
            "quit" => Ok(InputEvent::Quit),
            "other" => Ok(InputEvent::Other),
            _ => Err(ParseEventError::Unknown(token.to_string())),
        }
    }
}

/// Parse a comma-separated event script such as `"+,+,dy=-200,esc"`.
///
/// An empty script yields no events.
pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, ParseEventError> {
    if script.trim().is_empty() {
        return Ok(Vec::new());
    }
    script.split(',').map(str::parse).collect()
}
