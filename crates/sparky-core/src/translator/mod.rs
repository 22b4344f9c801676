//! Single-pass ducky script to Digispark sketch translator.
//!
//! ```text
//! script text
//!   └─ split_lines         one line at a time, top to bottom
//!        └─ classify_line  -> ScriptLine
//!             └─ Translator::handle_* -> Sketch (declarations + setup)
//!   └─ Sketch::render      fixed framing around the generated statements
//! ```
//!
//! The translator has no I/O and no global state: everything it needs lives in
//! a [`Translator`] value created for one call of [`translate`].

pub mod error;
pub mod options;
pub mod sketch;

use tracing::{debug, warn};

use crate::keymap::{resolve_char, HidKeyCode, KeyStroke, ModifierFlags};
use crate::script::{classify_line, parse_millis, split_lines, Millis, ScriptLine};

pub use error::TranslateError;
pub use options::{FallbackPolicy, TranslateOptions};
pub use sketch::Sketch;

/// Key pressed when a combination names a key that does not exist.
pub const FALLBACK_KEY: HidKeyCode = HidKeyCode::KeyR;

/// Prefix of the generated PROGMEM array names; a counter is appended.
pub const ARRAY_PREFIX: &str = "key_arr_";

/// Translates a complete ducky script into Digispark sketch source.
///
/// # Errors
///
/// Never fails under [`FallbackPolicy::Lenient`].  Under
/// [`FallbackPolicy::Strict`] the first unmapped character, key, modifier or
/// malformed delay is returned as a [`TranslateError`].
///
/// # Examples
///
/// ```rust
/// use sparky_core::{translate, TranslateOptions};
///
/// let sketch = translate("GUI r\nDELAY 250", &TranslateOptions::default()).unwrap();
/// assert!(sketch.contains("DigiKeyboard.sendKeyStroke(21, 8); // GUI r"));
/// assert!(sketch.contains("DigiKeyboard.delay(250); // DELAY 250"));
/// ```
pub fn translate(script: &str, options: &TranslateOptions) -> Result<String, TranslateError> {
    let mut translator = Translator::new(options);
    for (index, line) in split_lines(script).enumerate() {
        translator.process_line(index + 1, line)?;
    }
    Ok(translator.finish())
}

/// Translation state for one script.
#[derive(Debug)]
pub struct Translator<'o> {
    options: &'o TranslateOptions,
    /// `None` until a `DEFAULTDELAY` line is seen.
    default_delay: Option<Millis>,
    next_array: usize,
    sketch: Sketch,
}

impl<'o> Translator<'o> {
    pub fn new(options: &'o TranslateOptions) -> Self {
        Self {
            options,
            default_delay: None,
            next_array: 0,
            sketch: Sketch::new(),
        }
    }

    /// Current default delay, if one has been set.
    pub fn default_delay(&self) -> Option<&Millis> {
        self.default_delay.as_ref()
    }

    /// Number of string arrays allocated so far.
    pub fn arrays_allocated(&self) -> usize {
        self.next_array
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    /// Classifies and emits one script line.  `line_no` is 1-based.
    pub fn process_line(&mut self, line_no: usize, line: &str) -> Result<(), TranslateError> {
        let classified = classify_line(line);
        debug!("line {line_no}: {classified:?}");
        match classified {
            ScriptLine::Blank => Ok(()),
            ScriptLine::Comment(body) => {
                self.sketch.comment(body);
                Ok(())
            }
            ScriptLine::Delay(argument) => self.handle_delay(line_no, argument),
            ScriptLine::DefaultDelay(argument) => self.handle_default_delay(line_no, argument),
            ScriptLine::StringLiteral(payload) => self.handle_string(line_no, payload),
            ScriptLine::Enter => {
                self.sketch
                    .keystroke(KeyStroke::plain(HidKeyCode::Enter), "ENTER");
                self.trailing_delay();
                Ok(())
            }
            ScriptLine::Combo(tokens) => self.handle_combo(line_no, &tokens),
        }
    }

    /// Renders the sketch.
    pub fn finish(self) -> String {
        self.sketch.render(&self.options.layout)
    }

    fn handle_delay(&mut self, line_no: usize, argument: Option<&str>) -> Result<(), TranslateError> {
        let millis = self.millis(line_no, argument)?;
        self.sketch
            .delay(&millis, Some(format!("DELAY {millis}").as_str()));
        Ok(())
    }

    fn handle_default_delay(
        &mut self,
        line_no: usize,
        argument: Option<&str>,
    ) -> Result<(), TranslateError> {
        let millis = self.millis(line_no, argument)?;
        self.sketch
            .delay(&millis, Some(format!("DEFAULTDELAY {millis}").as_str()));
        self.default_delay = Some(millis);
        Ok(())
    }

    fn handle_string(&mut self, line_no: usize, payload: &str) -> Result<(), TranslateError> {
        let mut bytes = Vec::with_capacity(payload.len() * 2);
        for ch in payload.chars() {
            let stroke = match resolve_char(ch) {
                Some(stroke) => stroke,
                None => {
                    self.fallback(TranslateError::UnknownCharacter { line: line_no, ch })?;
                    KeyStroke::FALLBACK
                }
            };
            bytes.push(stroke.modifiers.bits());
            bytes.push(stroke.key.as_u8());
        }

        let name = format!("{ARRAY_PREFIX}{}", self.next_array);
        self.next_array += 1;
        debug!("line {line_no}: allocated {name} ({} bytes)", bytes.len());

        self.sketch.byte_array(&name, &bytes, payload);
        self.sketch.replay(&name, &format!("STRING {payload}"));
        self.trailing_delay();
        Ok(())
    }

    fn handle_combo(&mut self, line_no: usize, tokens: &[&str]) -> Result<(), TranslateError> {
        let Some((&key_token, modifier_tokens)) = tokens.split_last() else {
            return Ok(());
        };

        // A lone modifier has no key to send.
        if modifier_tokens.is_empty() && ModifierFlags::from_name(key_token).is_some() {
            debug!("line {line_no}: dropping bare modifier {key_token:?}");
            return Ok(());
        }

        let mut modifiers = ModifierFlags::NONE;
        for &token in modifier_tokens {
            match ModifierFlags::from_name(token) {
                Some(flag) => modifiers |= flag,
                None => self.fallback(TranslateError::UnknownModifier {
                    line: line_no,
                    token: token.to_string(),
                })?,
            }
        }

        let stroke = self.resolve_key_token(line_no, key_token)?;
        modifiers |= stroke.modifiers;

        self.sketch.keystroke(
            KeyStroke {
                modifiers,
                key: stroke.key,
            },
            &tokens.join(" "),
        );
        self.trailing_delay();
        Ok(())
    }

    /// Key names first, then single characters, then [`FALLBACK_KEY`].
    fn resolve_key_token(&self, line_no: usize, token: &str) -> Result<KeyStroke, TranslateError> {
        if let Some(key) = HidKeyCode::from_name(token) {
            return Ok(KeyStroke::plain(key));
        }

        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return match resolve_char(ch) {
                Some(stroke) => Ok(stroke),
                None => {
                    self.fallback(TranslateError::UnknownCharacter { line: line_no, ch })?;
                    Ok(KeyStroke::FALLBACK)
                }
            };
        }

        self.fallback(TranslateError::UnknownKey {
            line: line_no,
            token: token.to_string(),
        })?;
        Ok(KeyStroke::plain(FALLBACK_KEY))
    }

    fn millis(&self, line_no: usize, argument: Option<&str>) -> Result<Millis, TranslateError> {
        match argument.and_then(parse_millis) {
            Some(millis) => Ok(millis),
            None => {
                self.fallback(TranslateError::InvalidDelay {
                    line: line_no,
                    argument: argument.unwrap_or_default().to_string(),
                })?;
                Ok(Millis::zero())
            }
        }
    }

    fn trailing_delay(&mut self) {
        if let Some(millis) = &self.default_delay {
            self.sketch.delay(millis, None);
        }
    }

    /// Applies the fallback policy to an unmapped input.
    fn fallback(&self, error: TranslateError) -> Result<(), TranslateError> {
        match self.options.fallback {
            FallbackPolicy::Strict => Err(error),
            FallbackPolicy::Lenient => {
                warn!("{error}; substituting default");
                Ok(())
            }
        }
    }
}
