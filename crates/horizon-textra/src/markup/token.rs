//! Brace-token keywords.

use std::fmt;

/// What a brace token does when a label plays its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Wait,
    Speed,
    Color,
    Variable,
    If,
    Event,
    Reset,
    Skip,
    /// Starts a named text effect (`{SHAKE}`).
    EffectStart,
    /// Ends a named text effect (`{ENDSHAKE}`).
    EffectEnd,
}

/// Keywords with built-in meaning inside `{...}`.
///
/// Anything else in braces is a text effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalToken {
    Wait,
    Speed,
    Slower,
    Slow,
    Normal,
    Fast,
    Faster,
    Natural,
    Color,
    Style,
    Size,
    Font,
    ClearColor,
    ClearSize,
    ClearFont,
    EndColor,
    Var,
    If,
    Event,
    Reset,
    Skip,
}

impl InternalToken {
    /// Every token, in lookup order.
    pub const ALL: [Self; 21] = [
        Self::Wait,
        Self::Speed,
        Self::Slower,
        Self::Slow,
        Self::Normal,
        Self::Fast,
        Self::Faster,
        Self::Natural,
        Self::Color,
        Self::Style,
        Self::Size,
        Self::Font,
        Self::ClearColor,
        Self::ClearSize,
        Self::ClearFont,
        Self::EndColor,
        Self::Var,
        Self::If,
        Self::Event,
        Self::Reset,
        Self::Skip,
    ];

    /// The keyword as written in markup.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wait => "WAIT",
            Self::Speed => "SPEED",
            Self::Slower => "SLOWER",
            Self::Slow => "SLOW",
            Self::Normal => "NORMAL",
            Self::Fast => "FAST",
            Self::Faster => "FASTER",
            Self::Natural => "NATURAL",
            Self::Color => "COLOR",
            Self::Style => "STYLE",
            Self::Size => "SIZE",
            Self::Font => "FONT",
            Self::ClearColor => "CLEARCOLOR",
            Self::ClearSize => "CLEARSIZE",
            Self::ClearFont => "CLEARFONT",
            Self::EndColor => "ENDCOLOR",
            Self::Var => "VAR",
            Self::If => "IF",
            Self::Event => "EVENT",
            Self::Reset => "RESET",
            Self::Skip => "SKIP",
        }
    }

    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Wait => TokenCategory::Wait,
            Self::Speed
            | Self::Slower
            | Self::Slow
            | Self::Normal
            | Self::Fast
            | Self::Faster
            | Self::Natural => TokenCategory::Speed,
            Self::Color
            | Self::Style
            | Self::Size
            | Self::Font
            | Self::ClearColor
            | Self::ClearSize
            | Self::ClearFont
            | Self::EndColor => TokenCategory::Color,
            Self::Var => TokenCategory::Variable,
            Self::If => TokenCategory::If,
            Self::Event => TokenCategory::Event,
            Self::Reset => TokenCategory::Reset,
            Self::Skip => TokenCategory::Skip,
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|token| token.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for InternalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
