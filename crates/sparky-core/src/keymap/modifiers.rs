//! Modifier key bitmask as understood by `DigiKeyboard.sendKeyStroke`.

/// Modifier key bitmask passed as the second argument of `sendKeyStroke`.
///
/// Bit layout (the left-hand modifier bits of a HID boot keyboard report):
/// - Bit 0: Ctrl
/// - Bit 1: Shift
/// - Bit 2: Alt
/// - Bit 3: GUI (Windows/Command/Super)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierFlags(pub u8);

impl ModifierFlags {
    pub const NONE: ModifierFlags = ModifierFlags(0x00);
    pub const CTRL: ModifierFlags = ModifierFlags(1 << 0);
    pub const SHIFT: ModifierFlags = ModifierFlags(1 << 1);
    pub const ALT: ModifierFlags = ModifierFlags(1 << 2);
    pub const GUI: ModifierFlags = ModifierFlags(1 << 3);

    /// Parses a ducky script modifier token, ignoring case.
    ///
    /// Recognised names: `CTRL`, `CONTROL`, `SHIFT`, `ALT`, `GUI`, `WINDOWS`.
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: &[(&str, ModifierFlags)] = &[
            ("CTRL", ModifierFlags::CTRL),
            ("CONTROL", ModifierFlags::CTRL),
            ("SHIFT", ModifierFlags::SHIFT),
            ("ALT", ModifierFlags::ALT),
            ("GUI", ModifierFlags::GUI),
            ("WINDOWS", ModifierFlags::GUI),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, flags)| flags)
    }

    /// Returns the raw bitmask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if no modifier is held.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is also set in `self`.
    pub fn contains(self, other: ModifierFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ModifierFlags {
    type Output = ModifierFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        ModifierFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ModifierFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits_match_digikeyboard_constants() {
        assert_eq!(ModifierFlags::NONE.bits(), 0x00);
        assert_eq!(ModifierFlags::CTRL.bits(), 0x01);
        assert_eq!(ModifierFlags::SHIFT.bits(), 0x02);
        assert_eq!(ModifierFlags::ALT.bits(), 0x04);
        assert_eq!(ModifierFlags::GUI.bits(), 0x08);
    }

    #[test]
    fn test_from_name_accepts_aliases_in_any_case() {
        assert_eq!(ModifierFlags::from_name("ctrl"), Some(ModifierFlags::CTRL));
        assert_eq!(ModifierFlags::from_name("Control"), Some(ModifierFlags::CTRL));
        assert_eq!(ModifierFlags::from_name("WINDOWS"), Some(ModifierFlags::GUI));
        assert_eq!(ModifierFlags::from_name("gui"), Some(ModifierFlags::GUI));
        assert_eq!(ModifierFlags::from_name("Alt"), Some(ModifierFlags::ALT));
        assert_eq!(ModifierFlags::from_name("shift"), Some(ModifierFlags::SHIFT));
    }

    #[test]
    fn test_from_name_rejects_non_modifiers() {
        for name in ["", "r", "ENTER", "COMMAND", "CTRL-ALT"] {
            assert_eq!(ModifierFlags::from_name(name), None, "{name:?}");
        }
    }

    #[test]
    fn test_bitor_combines_flags() {
        // Arrange
        let mut flags = ModifierFlags::CTRL | ModifierFlags::ALT;

        // Act
        flags |= ModifierFlags::GUI;

        // Assert
        assert_eq!(flags.bits(), 0x0D);
        assert!(flags.contains(ModifierFlags::CTRL | ModifierFlags::GUI));
        assert!(!flags.contains(ModifierFlags::SHIFT));
        assert!(!flags.is_empty());
        assert!(ModifierFlags::default().is_empty());
    }
}
