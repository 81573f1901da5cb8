//! Pointer input vocabulary.

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

impl PointerButton {
    /// Maps a toolkit button number (1 = primary, 2 = middle, 3 = secondary,
    /// 8/9 = back/forward) to a button.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(PointerButton::Primary),
            2 => Some(PointerButton::Middle),
            3 => Some(PointerButton::Secondary),
            8 => Some(PointerButton::Back),
            9 => Some(PointerButton::Forward),
            _ => None,
        }
    }

    pub fn is_primary(self) -> bool {
        self == PointerButton::Primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_numbers() {
        assert_eq!(PointerButton::from_number(1), Some(PointerButton::Primary));
        assert_eq!(PointerButton::from_number(3), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_number(42), None);
        assert!(PointerButton::Primary.is_primary());
        assert!(!PointerButton::Middle.is_primary());
    }
}
