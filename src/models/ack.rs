use crate::config::dom_ids::COPIED_CLASS;

/// Whether the `copiado` class is currently set on the acknowledgment element.
///
/// Every copy flips it twice: once right away and once after the
/// acknowledgment delay. Overlapping copies are not coalesced, so each
/// pending flip still fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AckFlash(bool);

impl AckFlash {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn is_shown(self) -> bool {
        self.0
    }

    /// Class attribute for the acknowledgment element.
    pub fn class_name(self) -> &'static str {
        if self.0 { COPIED_CLASS } else { "" }
    }
}
