use crate::config::dom_ids::{APPEAR_CLASS, HIDDEN_CLASS};

/// Class-list configuration of the socials panel.
///
/// Each variant is one combination of the `hidden` / `aparecer` classes.
/// [`PanelState::next`] reproduces the page's click behavior: toggle
/// `aparecer`, then toggle `hidden` unless the class attribute is now exactly
/// `hidden`, in which case `aparecer` is toggled back. From `Hidden` this
/// alternates cleanly with `Shown`; `Bare` and `Both` only arise from markup
/// that starts without exactly one of the classes, and `Both` never leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// `class="hidden"`
    #[default]
    Hidden,
    /// `class="aparecer"`
    Shown,
    /// No state classes.
    Bare,
    /// `class="hidden aparecer"`
    Both,
}

impl PanelState {
    /// State after one click on the socials button.
    pub fn next(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
            Self::Bare => Self::Both,
            Self::Both => Self::Both,
        }
    }

    /// Class attribute for this state.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Hidden => HIDDEN_CLASS,
            Self::Shown => APPEAR_CLASS,
            Self::Bare => "",
            Self::Both => "hidden aparecer",
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ordered class list with DOMTokenList toggle semantics.
    fn toggle(classes: &mut Vec<&'static str>, class: &'static str) {
        if let Some(pos) = classes.iter().position(|c| *c == class) {
            classes.remove(pos);
        } else {
            classes.push(class);
        }
    }

    /// Click handler as it behaves on the live class attribute.
    fn click_on_class_list(classes: &mut Vec<&'static str>) {
        toggle(classes, APPEAR_CLASS);
        if classes.join(" ") != HIDDEN_CLASS {
            toggle(classes, HIDDEN_CLASS);
        } else {
            toggle(classes, APPEAR_CLASS);
        }
    }

    fn classes_of(state: PanelState) -> Vec<&'static str> {
        state.class_name().split_whitespace().collect()
    }

    fn same_set(a: &[&str], b: &[&str]) -> bool {
        a.len() == b.len() && a.iter().all(|c| b.contains(c))
    }

    #[test]
    fn test_transitions_match_class_list_behavior() {
        for state in [
            PanelState::Hidden,
            PanelState::Shown,
            PanelState::Bare,
            PanelState::Both,
        ] {
            let mut classes = classes_of(state);
            click_on_class_list(&mut classes);
            assert!(
                same_set(&classes, &classes_of(state.next())),
                "{:?}: class list {:?} vs {:?}",
                state,
                classes,
                state.next().class_name()
            );
        }
    }

    #[test]
    fn test_both_orderings_behave_the_same() {
        let mut a = vec![HIDDEN_CLASS, APPEAR_CLASS];
        let mut b = vec![APPEAR_CLASS, HIDDEN_CLASS];
        click_on_class_list(&mut a);
        click_on_class_list(&mut b);
        assert!(same_set(&a, &classes_of(PanelState::Both)));
        assert!(same_set(&b, &classes_of(PanelState::Both)));
    }

    #[test]
    fn test_double_click_from_hidden() {
        let first = PanelState::Hidden.next();
        assert_eq!(first, PanelState::Shown);
        assert_eq!(first.class_name(), "aparecer");
        assert!(first.is_visible());

        let second = first.next();
        assert_eq!(second, PanelState::Hidden);
        assert_eq!(second.class_name(), "hidden");
        assert!(!second.is_visible());
    }

    #[test]
    fn test_bare_gets_stuck_in_both() {
        let s = PanelState::Bare.next();
        assert_eq!(s, PanelState::Both);
        assert_eq!(s.next(), PanelState::Both);
        assert_eq!(s.next().next(), PanelState::Both);
    }

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(PanelState::default(), PanelState::Hidden);
    }
}
