/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// True if any of the given buttons is down
    fn any_down(&self, buttons: &[Button]) -> bool {
        buttons.iter().any(|&b| self.is_down(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_button_hash_duplicates() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyW);

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::ArrowLeft],
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::ArrowLeft));
        assert!(!controller.is_down(Button::KeyA));
    }

    #[test]
    fn test_controller_any_down() {
        let controller = MockController {
            pressed: vec![Button::ArrowRight],
        };

        assert!(controller.any_down(&[Button::KeyD, Button::ArrowRight]));
        assert!(!controller.any_down(&[Button::KeyA, Button::ArrowLeft]));
        assert!(!controller.any_down(&[]));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::Escape));
        assert!(!controller.any_down(&[Button::KeyW, Button::KeyS]));
    }
}
