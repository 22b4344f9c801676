//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page) and the ducky script
//! key-name table.
//!
//! `DigiKeyboard.sendKeyStroke(key, modifiers)` takes the raw HID usage id of
//! the key, so every keystroke the translator emits is ultimately one of the
//! values below.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a unique number to
//! every key on a keyboard.  These numbers are called *Usage IDs*.
//!
//! | Key          | HID Usage ID |
//! |--------------|-------------|
//! | Letter A     | 0x04        |
//! | Letter R     | 0x15        |
//! | Enter        | 0x28        |
//! | Space        | 0x2C        |
//!
//! HID codes represent **physical key positions**, not characters.  The
//! character a key produces depends on the layout configured on the host, which
//! is why the table here only matches what a US layout prints.

/// USB HID Usage ID for the keys a ducky script can name.
///
/// The numeric value of each variant is its HID Usage ID on the keyboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys and punctuation (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    NumLock = 0x53,

    // Application key (HID 0x65)
    ContextMenu = 0x65,
}

/// Letter keys in alphabetical order, indexed by `c - b'a'`.
const LETTERS: [HidKeyCode; 26] = {
    use HidKeyCode::*;
    [
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM, KeyN,
        KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ]
};

/// Digit keys indexed by `c - b'0'`.  HID orders them 1..9 then 0.
const DIGITS: [HidKeyCode; 10] = {
    use HidKeyCode::*;
    [
        Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
    ]
};

/// Ducky script key names that are longer than one character.
///
/// Single letters and digits are not listed; [`HidKeyCode::from_name`] handles
/// them directly.  Names are stored upper-case and matched case-insensitively.
const NAMED_KEYS: &[(&str, HidKeyCode)] = &[
    ("ENTER", HidKeyCode::Enter),
    ("ESC", HidKeyCode::Escape),
    ("ESCAPE", HidKeyCode::Escape),
    ("BACKSPACE", HidKeyCode::Backspace),
    ("TAB", HidKeyCode::Tab),
    ("SPACE", HidKeyCode::Space),
    ("MINUS", HidKeyCode::Minus),
    ("EQUAL", HidKeyCode::Equal),
    ("LEFTBRACE", HidKeyCode::BracketLeft),
    ("RIGHTBRACE", HidKeyCode::BracketRight),
    ("BACKSLASH", HidKeyCode::Backslash),
    ("SEMICOLON", HidKeyCode::Semicolon),
    ("APOSTROPHE", HidKeyCode::Quote),
    ("GRAVE", HidKeyCode::Backquote),
    ("COMMA", HidKeyCode::Comma),
    ("DOT", HidKeyCode::Period),
    ("SLASH", HidKeyCode::Slash),
    ("CAPSLOCK", HidKeyCode::CapsLock),
    ("F1", HidKeyCode::F1),
    ("F2", HidKeyCode::F2),
    ("F3", HidKeyCode::F3),
    ("F4", HidKeyCode::F4),
    ("F5", HidKeyCode::F5),
    ("F6", HidKeyCode::F6),
    ("F7", HidKeyCode::F7),
    ("F8", HidKeyCode::F8),
    ("F9", HidKeyCode::F9),
    ("F10", HidKeyCode::F10),
    ("F11", HidKeyCode::F11),
    ("F12", HidKeyCode::F12),
    ("PRINTSCREEN", HidKeyCode::PrintScreen),
    ("SCROLLLOCK", HidKeyCode::ScrollLock),
    ("PAUSE", HidKeyCode::Pause),
    ("BREAK", HidKeyCode::Pause),
    ("INSERT", HidKeyCode::Insert),
    ("HOME", HidKeyCode::Home),
    ("PAGEUP", HidKeyCode::PageUp),
    ("DELETE", HidKeyCode::Delete),
    ("DEL", HidKeyCode::Delete),
    ("END", HidKeyCode::End),
    ("PAGEDOWN", HidKeyCode::PageDown),
    ("RIGHTARROW", HidKeyCode::ArrowRight),
    ("RIGHT", HidKeyCode::ArrowRight),
    ("LEFTARROW", HidKeyCode::ArrowLeft),
    ("LEFT", HidKeyCode::ArrowLeft),
    ("DOWNARROW", HidKeyCode::ArrowDown),
    ("DOWN", HidKeyCode::ArrowDown),
    ("UPARROW", HidKeyCode::ArrowUp),
    ("UP", HidKeyCode::ArrowUp),
    ("NUMLOCK", HidKeyCode::NumLock),
    ("MENU", HidKeyCode::ContextMenu),
    ("APP", HidKeyCode::ContextMenu),
];

impl HidKeyCode {
    /// Returns the raw USB HID Usage ID value for this key code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the key for an ASCII letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(LETTERS[(c.to_ascii_lowercase() as u8 - b'a') as usize])
        } else {
            None
        }
    }

    /// Returns the key for an ASCII digit.
    pub fn from_digit(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(DIGITS[(c as u8 - b'0') as usize])
        } else {
            None
        }
    }

    /// Looks up a ducky script key name (`ENTER`, `TAB`, `a`, `7`, `F5`, ...).
    ///
    /// Matching is case-insensitive.  Single-character names only match
    /// letters and digits; punctuation characters are not key *names* and go
    /// through [`crate::keymap::resolve_char`] instead.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_letter(c).or_else(|| Self::from_digit(c));
        }
        NAMED_KEYS
            .iter()
            .find(|(key_name, _)| key_name.eq_ignore_ascii_case(name))
            .map(|&(_, code)| code)
    }
}
