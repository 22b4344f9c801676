//! Character and key-name translation tables.
//!
//! Everything the translator types ends up as a [`KeyStroke`]: a HID usage id
//! plus the modifiers held while it is pressed.  The tables here describe how a
//! US keyboard produces each printable ASCII character.

pub mod hid;
pub mod modifiers;

pub use hid::HidKeyCode;
pub use modifiers::ModifierFlags;

/// One key press: the modifiers held and the key pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub modifiers: ModifierFlags,
    pub key: HidKeyCode,
}

impl KeyStroke {
    /// A key pressed without any modifier.
    pub const fn plain(key: HidKeyCode) -> Self {
        Self {
            modifiers: ModifierFlags::NONE,
            key,
        }
    }

    /// A key pressed with Shift held.
    pub const fn shifted(key: HidKeyCode) -> Self {
        Self {
            modifiers: ModifierFlags::SHIFT,
            key,
        }
    }

    /// The stroke substituted for characters with no mapping.
    pub const FALLBACK: KeyStroke = KeyStroke::plain(HidKeyCode::Space);
}

/// Characters typed by holding Shift and pressing the mapped base key.
pub const SHIFT_CHARACTERS: &[(char, HidKeyCode)] = &[
    ('!', HidKeyCode::Digit1),
    ('@', HidKeyCode::Digit2),
    ('#', HidKeyCode::Digit3),
    ('$', HidKeyCode::Digit4),
    ('%', HidKeyCode::Digit5),
    ('^', HidKeyCode::Digit6),
    ('&', HidKeyCode::Digit7),
    ('*', HidKeyCode::Digit8),
    ('(', HidKeyCode::Digit9),
    (')', HidKeyCode::Digit0),
    ('_', HidKeyCode::Minus),
    ('+', HidKeyCode::Equal),
    ('{', HidKeyCode::BracketLeft),
    ('}', HidKeyCode::BracketRight),
    ('|', HidKeyCode::Backslash),
    (':', HidKeyCode::Semicolon),
    ('"', HidKeyCode::Quote),
    ('~', HidKeyCode::Backquote),
    ('<', HidKeyCode::Comma),
    ('>', HidKeyCode::Period),
    ('?', HidKeyCode::Slash),
];

/// Punctuation typed without any modifier.
pub const PLAIN_SYMBOLS: &[(char, HidKeyCode)] = &[
    ('-', HidKeyCode::Minus),
    ('=', HidKeyCode::Equal),
    ('[', HidKeyCode::BracketLeft),
    (']', HidKeyCode::BracketRight),
    ('\\', HidKeyCode::Backslash),
    (';', HidKeyCode::Semicolon),
    ('\'', HidKeyCode::Quote),
    ('`', HidKeyCode::Backquote),
    (',', HidKeyCode::Comma),
    ('.', HidKeyCode::Period),
    ('/', HidKeyCode::Slash),
];

/// Resolves a single character to the keystroke that types it.
///
/// Returns `None` for characters a US keyboard cannot type with one stroke
/// (control characters, non-ASCII text).  Callers decide whether that is an
/// error or whether to substitute [`KeyStroke::FALLBACK`].
pub fn resolve_char(c: char) -> Option<KeyStroke> {
    if let Some(key) = HidKeyCode::from_letter(c) {
        return Some(if c.is_ascii_uppercase() {
            KeyStroke::shifted(key)
        } else {
            KeyStroke::plain(key)
        });
    }
    if let Some(key) = HidKeyCode::from_digit(c) {
        return Some(KeyStroke::plain(key));
    }
    if c == ' ' {
        return Some(KeyStroke::plain(HidKeyCode::Space));
    }
    if let Some(key) = lookup(SHIFT_CHARACTERS, c) {
        return Some(KeyStroke::shifted(key));
    }
    lookup(PLAIN_SYMBOLS, c).map(KeyStroke::plain)
}

fn lookup(table: &[(char, HidKeyCode)], c: char) -> Option<HidKeyCode> {
    table
        .iter()
        .find(|&&(glyph, _)| glyph == c)
        .map(|&(_, key)| key)
}
