//! # sparky-core
//!
//! Translator from ducky script (a line-oriented keystroke automation
//! language) to the source of a Digispark sketch that replays the same
//! keystrokes through the `DigiKeyboard` USB keyboard library.
//!
//! This crate has no dependencies on the file system, the process
//! environment or any UI.  The `sparky-cli` crate is the shell around it.
//!
//! # Architecture overview (for beginners)
//!
//! - **`keymap`** – Static tables from key names and characters to USB HID
//!   usage ids, plus the modifier bitmask.  `'!'` becomes Shift + the `1` key,
//!   `ENTER` becomes usage id 0x28, and so on.
//!
//! - **`script`** – Classifies each script line into a [`ScriptLine`]
//!   (`DELAY`, `STRING`, a key combination, a comment, ...).
//!
//! - **`translator`** – Walks the lines top to bottom, keeps the default
//!   delay and the string-array counter, and generates the sketch text.
//!
//! ```rust
//! use sparky_core::{translate, TranslateOptions};
//!
//! let script = "DEFAULTDELAY 100\nGUI r\nSTRING notepad\nENTER";
//! let sketch = translate(script, &TranslateOptions::default()).unwrap();
//! assert!(sketch.contains("#include \"DigiKeyboard.h\""));
//! assert!(sketch.contains("duckyString(key_arr_0, sizeof(key_arr_0)); // STRING notepad"));
//! ```

pub mod keymap;
pub mod script;
pub mod translator;

// Re-export the most-used types at the crate root so callers can write
// `sparky_core::translate` instead of `sparky_core::translator::translate`.
pub use keymap::{resolve_char, HidKeyCode, KeyStroke, ModifierFlags};
pub use script::{classify_line, split_lines, Millis, ScriptLine};
pub use translator::{translate, FallbackPolicy, TranslateError, TranslateOptions, Translator};
