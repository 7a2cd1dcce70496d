//! Splitting text at `{...}` tokens.

use horizon_textra_core::logging::targets;

use super::token::{InternalToken, TokenCategory};

/// One piece of scanned markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `{{` already unescaped.
    Text(String),
    /// A built-in token such as `{WAIT=0.5}`.
    Token {
        token: InternalToken,
        param: Option<String>,
    },
    /// A named effect such as `{SHAKE=1;1}` or `{ENDSHAKE}`.
    Effect {
        /// Upper-cased effect name without any `END` prefix.
        name: String,
        param: Option<String>,
        end: bool,
    },
}

impl Segment {
    pub fn category(&self) -> Option<TokenCategory> {
        match self {
            Self::Text(_) => None,
            Self::Token { token, .. } => Some(token.category()),
            Self::Effect { end: false, .. } => Some(TokenCategory::EffectStart),
            Self::Effect { end: true, .. } => Some(TokenCategory::EffectEnd),
        }
    }
}

fn classify(body: &str) -> Segment {
    let (name, param) = match body.split_once('=') {
        Some((name, param)) => (name.trim(), Some(param.trim().to_string())),
        None => (body.trim(), None),
    };
    if let Some(token) = InternalToken::from_name(name) {
        return Segment::Token { token, param };
    }
    let upper = name.to_ascii_uppercase();
    match upper.strip_prefix("END") {
        Some(effect) if !effect.is_empty() => Segment::Effect {
            name: effect.to_string(),
            param,
            end: true,
        },
        _ => Segment::Effect {
            name: upper,
            param,
            end: false,
        },
    }
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Split `text` into literal runs and brace tokens.
///
/// `{{` is a literal brace. An unclosed `{` and everything after it is kept
/// as text.
pub fn scan(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        push_text(&mut segments, &rest[..open]);
        let after = &rest[open + 1..];
        if let Some(escaped) = after.strip_prefix('{') {
            push_text(&mut segments, "{");
            rest = escaped;
            continue;
        }
        match after.find('}') {
            Some(close) if !after[..close].trim().is_empty() => {
                segments.push(classify(&after[..close]));
                rest = &after[close + 1..];
            }
            Some(close) => {
                push_text(&mut segments, &rest[open..open + close + 2]);
                rest = &after[close + 1..];
            }
            None => {
                tracing::trace!(target: targets::MARKUP, offset = open, "unclosed brace kept as text");
                push_text(&mut segments, &rest[open..]);
                rest = "";
            }
        }
    }
    push_text(&mut segments, rest);
    segments
}

/// The text a label would display, with every token removed.
pub fn plain_text(text: &str) -> String {
    scan(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(t) => Some(t),
            _ => None,
        })
        .collect()
}
