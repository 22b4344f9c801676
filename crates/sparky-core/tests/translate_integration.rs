//! Integration tests for the sparky-core translator.
//!
//! These tests go through the public `translate` entry point only and check
//! complete generated sketches, so the header, declarations, replay routine
//! and `setup()` body are verified together.

use sparky_core::{
    resolve_char, translate, FallbackPolicy, HidKeyCode, KeyStroke, ModifierFlags,
    TranslateError, TranslateOptions,
};

const HEADER: &[&str] = &[
    "",
    "//+-----------------------------------+",
    "//|This sketch is converted by Sparky.|",
    "//|            .-------.              |",
    "//|         By | PXZYA |              |",
    "//|            '-------'              |",
    "//+-----------------------------------+",
    "",
    "//-> Platform: Digispark",
];

const REPLAY_AND_PROLOGUE: &[&str] = &[
    "",
    "void duckyString(const uint8_t* keys, size_t len) {  ",
    "    for(size_t i=0; i<len; i+=2) {",
    "        DigiKeyboard.sendKeyStroke(pgm_read_byte_near(keys + i+1), pgm_read_byte_near(keys + i));",
    "    }",
    "}",
    "",
    "void setup() {",
    "    pinMode(1, OUTPUT); // Enable LED",
    "    digitalWrite(1, LOW); // Turn LED off",
    "    DigiKeyboard.sendKeyStroke(0); // Tell computer no key is pressed",
    "",
];

const FOOTER: &[&str] = &["}", "", "void loop() {}", "", "// Created by Sparky"];

/// Builds the expected sketch text from its variable parts.
fn expected_sketch(layout: &str, declarations: &[&str], setup: &[&str]) -> String {
    let layout_line = format!("//-> Keyboard Layout: {layout}");
    let mut lines: Vec<&str> = HEADER.to_vec();
    lines.push(&layout_line);
    lines.push("");
    lines.push("#include \"DigiKeyboard.h\"");
    lines.push("");
    lines.extend_from_slice(declarations);
    lines.extend_from_slice(REPLAY_AND_PROLOGUE);
    lines.extend_from_slice(setup);
    lines.extend_from_slice(FOOTER);
    lines.join("\n")
}

fn lenient(script: &str) -> String {
    translate(script, &TranslateOptions::default()).expect("lenient translation never fails")
}

fn setup_lines(sketch: &str) -> Vec<&str> {
    let start = sketch
        .find("// Tell computer no key is pressed\n\n")
        .expect("prologue present")
        + "// Tell computer no key is pressed\n\n".len();
    let end = sketch.rfind("}\n\nvoid loop()").expect("loop present");
    sketch[start..end].lines().collect()
}

#[test]
fn test_complete_sketch_for_run_box_script() {
    // Arrange
    let script = "\
// open run
DEFAULTDELAY 100
GUI r
STRING notepad
ENTER

DELAY 500
STRING Hi!
";

    // Act
    let sketch = lenient(script);

    // Assert
    let expected = expected_sketch(
        "US",
        &[
            "// open run",
            "// notepad",
            "const uint8_t key_arr_0[] PROGMEM = {0, 17, 0, 18, 0, 23, 0, 8, 0, 19, 0, 4, 0, 7};",
            "// Hi!",
            "const uint8_t key_arr_1[] PROGMEM = {2, 11, 0, 12, 2, 30};",
        ],
        &[
            "    DigiKeyboard.delay(100); // DEFAULTDELAY 100",
            "    DigiKeyboard.sendKeyStroke(21, 8); // GUI r",
            "    DigiKeyboard.delay(100);",
            "    duckyString(key_arr_0, sizeof(key_arr_0)); // STRING notepad",
            "    DigiKeyboard.delay(100);",
            "    DigiKeyboard.sendKeyStroke(40, 0); // ENTER",
            "    DigiKeyboard.delay(100);",
            "    DigiKeyboard.delay(500); // DELAY 500",
            "    duckyString(key_arr_1, sizeof(key_arr_1)); // STRING Hi!",
            "    DigiKeyboard.delay(100);",
        ],
    );
    assert_eq!(sketch, expected);
}

#[test]
fn test_empty_script_produces_bare_framing() {
    assert_eq!(lenient(""), expected_sketch("US", &[], &[]));
    assert_eq!(lenient("\n\n   \n"), expected_sketch("US", &[], &[]));
}

#[test]
fn test_layout_tag_is_rendered_and_sketch_name_is_not() {
    // Arrange
    let options = TranslateOptions {
        layout: "DE".to_string(),
        sketch_name: "my_unique_sketch_name".to_string(),
        fallback: FallbackPolicy::Lenient,
    };

    // Act
    let sketch = translate("ENTER", &options).unwrap();

    // Assert
    assert!(sketch.contains("//-> Keyboard Layout: DE\n"));
    assert!(!sketch.contains("my_unique_sketch_name"));
}

#[test]
fn test_translation_is_deterministic() {
    let script = "DEFAULTDELAY 20\nSTRING abc\nSTRING abc\nCTRL ALT t\nREM done";
    assert_eq!(lenient(script), lenient(script));
}

#[test]
fn test_delay_alone_emits_exactly_one_statement() {
    let sketch = lenient("DELAY 250");
    assert_eq!(
        setup_lines(&sketch),
        vec!["    DigiKeyboard.delay(250); // DELAY 250"]
    );
    assert!(!sketch.contains("PROGMEM"));
}

#[test]
fn test_default_delay_then_string() {
    let sketch = lenient("DEFAULTDELAY 100\nSTRING hi");
    assert!(sketch.contains("const uint8_t key_arr_0[] PROGMEM = {0, 11, 0, 12};"));
    assert_eq!(
        setup_lines(&sketch),
        vec![
            "    DigiKeyboard.delay(100); // DEFAULTDELAY 100",
            "    duckyString(key_arr_0, sizeof(key_arr_0)); // STRING hi",
            "    DigiKeyboard.delay(100);",
        ]
    );
}

#[test]
fn test_bare_gui_line_emits_nothing() {
    assert_eq!(lenient("GUI"), lenient(""));
}

#[test]
fn test_gui_r_emits_gui_keystroke() {
    assert_eq!(
        setup_lines(&lenient("GUI r")),
        vec!["    DigiKeyboard.sendKeyStroke(21, 8); // GUI r"]
    );
}

#[test]
fn test_unknown_token_falls_back_to_r_without_modifiers() {
    assert_eq!(
        setup_lines(&lenient("FOO")),
        vec!["    DigiKeyboard.sendKeyStroke(21, 0); // FOO"]
    );
}

#[test]
fn test_array_counter_only_advances_on_string_lines() {
    // Arrange
    let script = "// a\n\nSTRING x\n// b\nDELAY 5\nENTER\n\nSTRING y\nREM c\nSTRING z";

    // Act
    let sketch = lenient(script);

    // Assert
    assert!(sketch.contains("key_arr_0[] PROGMEM = {0, 27};"));
    assert!(sketch.contains("key_arr_1[] PROGMEM = {0, 28};"));
    assert!(sketch.contains("key_arr_2[] PROGMEM = {0, 29};"));
    assert!(!sketch.contains("key_arr_3"));
}

#[test]
fn test_windows_line_endings_are_accepted() {
    assert_eq!(lenient("GUI r\r\nENTER\r\n"), lenient("GUI r\nENTER\n"));
}

#[test]
fn test_carriage_return_line_endings_are_accepted() {
    // Arrange / Act
    let sketch = lenient("GUI r\rSTRING x\r");

    // Assert
    assert_eq!(sketch, lenient("GUI r\nSTRING x\n"));
    assert!(sketch.contains("    DigiKeyboard.sendKeyStroke(21, 8); // GUI r\n"));
    assert!(sketch.contains("    duckyString(key_arr_0, sizeof(key_arr_0)); // STRING x\n"));
}

#[test]
fn test_delay_beyond_u64_is_emitted_as_written() {
    let sketch = lenient("DELAY 99999999999999999999\nDEFAULTDELAY 000123456789012345678901\nENTER");
    assert!(sketch.contains(
        "    DigiKeyboard.delay(99999999999999999999); // DELAY 99999999999999999999\n"
    ));
    assert!(sketch.contains(
        "    DigiKeyboard.sendKeyStroke(40, 0); // ENTER\n    DigiKeyboard.delay(123456789012345678901);\n"
    ));
}

#[test]
fn test_delay_beyond_u64_is_accepted_in_strict_mode() {
    let options = TranslateOptions {
        fallback: FallbackPolicy::Strict,
        ..TranslateOptions::default()
    };
    assert!(translate("DELAY 99999999999999999999", &options).is_ok());
}

#[test]
fn test_strict_mode_reports_first_offending_line() {
    // Arrange
    let options = TranslateOptions {
        fallback: FallbackPolicy::Strict,
        ..TranslateOptions::default()
    };

    // Act
    let result = translate("GUI r\nSTRING ok\nWINDOWS FOO\nSTRING \u{2603}", &options);

    // Assert
    assert_eq!(
        result,
        Err(TranslateError::UnknownKey {
            line: 3,
            token: "FOO".to_string()
        })
    );
}

#[test]
fn test_strict_mode_accepts_clean_script_with_same_output() {
    let script = "DEFAULTDELAY 10\nCTRL SHIFT ESC\nSTRING Task Manager!\nENTER";
    let strict = TranslateOptions {
        fallback: FallbackPolicy::Strict,
        ..TranslateOptions::default()
    };
    assert_eq!(translate(script, &strict).unwrap(), lenient(script));
}

#[test]
fn test_resolver_properties_through_public_api() {
    for c in 'a'..='z' {
        let lower = resolve_char(c).unwrap();
        let upper = resolve_char(c.to_ascii_uppercase()).unwrap();
        assert_eq!(lower.modifiers, ModifierFlags::NONE);
        assert_eq!(upper.modifiers, ModifierFlags::SHIFT);
        assert_eq!(lower.key, upper.key);
    }
    assert_eq!(
        resolve_char('?'),
        Some(KeyStroke {
            modifiers: ModifierFlags::SHIFT,
            key: HidKeyCode::Slash
        })
    );
}
