//! Digispark sketch text generation.
//!
//! A [`Sketch`] collects generated statements into two append-only sections:
//!
//! ```text
//! <header>
//! <declarations>   file scope: PROGMEM arrays and passthrough comments
//! duckyString()
//! setup() {
//!     <prologue>
//!     <setup>      keystrokes, string replays, delays
//! }
//! loop() {}
//! ```
//!
//! Statements stay in the order they were generated; [`Sketch::render`] only
//! wraps them in the fixed framing.

use crate::keymap::KeyStroke;
use crate::script::Millis;

const BANNER: &[&str] = &[
    "//+-----------------------------------+",
    "//|This sketch is converted by Sparky.|",
    "//|            .-------.              |",
    "//|         By | PXZYA |              |",
    "//|            '-------'              |",
    "//+-----------------------------------+",
];

/// Replays a PROGMEM array of (modifier, keycode) byte pairs.
const REPLAY_ROUTINE: &[&str] = &[
    "void duckyString(const uint8_t* keys, size_t len) {  ",
    "    for(size_t i=0; i<len; i+=2) {",
    "        DigiKeyboard.sendKeyStroke(pgm_read_byte_near(keys + i+1), pgm_read_byte_near(keys + i));",
    "    }",
    "}",
];

const SETUP_PROLOGUE: &[&str] = &[
    "void setup() {",
    "    pinMode(1, OUTPUT); // Enable LED",
    "    digitalWrite(1, LOW); // Turn LED off",
    "    DigiKeyboard.sendKeyStroke(0); // Tell computer no key is pressed",
];

const INDENT: &str = "    ";

/// Generated sketch under construction.
#[derive(Debug, Default, Clone)]
pub struct Sketch {
    declarations: Vec<String>,
    setup: Vec<String>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passthrough comment at file scope.  `body` is everything after `//`.
    pub fn comment(&mut self, body: &str) {
        self.declarations.push(format!("//{body}"));
    }

    /// Declares a PROGMEM byte array, preceded by a comment echoing `label`.
    pub fn byte_array(&mut self, name: &str, bytes: &[u8], label: &str) {
        let values = bytes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.declarations.push(format!("// {label}"));
        self.declarations
            .push(format!("const uint8_t {name}[] PROGMEM = {{{values}}};"));
    }

    /// Replays a previously declared array through `duckyString`.
    pub fn replay(&mut self, name: &str, annotation: &str) {
        self.setup.push(format!(
            "{INDENT}duckyString({name}, sizeof({name})); // {annotation}"
        ));
    }

    /// Pauses for `millis`, with an optional trailing comment.
    pub fn delay(&mut self, millis: &Millis, annotation: Option<&str>) {
        let statement = format!("{INDENT}DigiKeyboard.delay({millis});");
        self.setup.push(match annotation {
            Some(text) => format!("{statement} // {text}"),
            None => statement,
        });
    }

    /// Sends one keystroke, annotated with the script text it came from.
    pub fn keystroke(&mut self, stroke: KeyStroke, annotation: &str) {
        self.setup.push(format!(
            "{INDENT}DigiKeyboard.sendKeyStroke({}, {}); // {annotation}",
            stroke.key.as_u8(),
            stroke.modifiers.bits()
        ));
    }

    /// File-scope lines generated so far.
    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    /// `setup()` statements generated so far, excluding the fixed prologue.
    pub fn setup(&self) -> &[String] {
        &self.setup
    }

    /// Renders the complete sketch.  The result has no trailing newline.
    pub fn render(&self, layout: &str) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(
            BANNER.len() + REPLAY_ROUTINE.len() + SETUP_PROLOGUE.len() + 16
                + self.declarations.len()
                + self.setup.len(),
        );
        let layout_line = format!("//-> Keyboard Layout: {layout}");

        lines.push("");
        lines.extend_from_slice(BANNER);
        lines.push("");
        lines.push("//-> Platform: Digispark");
        lines.push(&layout_line);
        lines.push("");
        lines.push("#include \"DigiKeyboard.h\"");
        lines.push("");
        lines.extend(self.declarations.iter().map(String::as_str));
        lines.push("");
        lines.extend_from_slice(REPLAY_ROUTINE);
        lines.push("");
        lines.extend_from_slice(SETUP_PROLOGUE);
        lines.push("");
        lines.extend(self.setup.iter().map(String::as_str));
        lines.push("}");
        lines.push("");
        lines.push("void loop() {}");
        lines.push("");
        lines.push("// Created by Sparky");

        lines.join("\n")
    }
}
