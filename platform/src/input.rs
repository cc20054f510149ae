use core::ops::{Index, IndexMut};
use crate::error::InputError;

#[derive(Clone)]
pub struct KeyboardState {
    keys: [DigitalKey; Key::COUNT],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self { keys: [Default::default(); Key::COUNT] }
    }
}

impl KeyboardState {
    /// Raw lookup by [`Key`] index, bounds-checked.
    pub fn by_index(&self, index: usize) -> Result<DigitalKey, InputError> {
        self.keys
            .get(index)
            .copied()
            .ok_or(InputError::KeyOutOfRange { index, count: Key::COUNT })
    }

    pub(crate) fn age(&mut self) {
        self.keys.iter_mut().for_each(DigitalKey::age);
    }
}

impl Index<Key> for KeyboardState {
    type Output = DigitalKey;
    fn index(&self, key: Key) -> &Self::Output {
        &self.keys[key as usize]
    }
}

impl IndexMut<Key> for KeyboardState {
    fn index_mut(&mut self, key: Key) -> &mut DigitalKey {
        &mut self.keys[key as usize]
    }
}

//TODO: scroll wheel
#[derive(Clone, Default)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    buttons: [DigitalKey; MouseButton::COUNT],
}

impl MouseState {
    #[inline(always)] pub fn pos(&self) -> (i32, i32) { (self.x, self.y) }

    pub fn by_index(&self, index: usize) -> Result<DigitalKey, InputError> {
        self.buttons
            .get(index)
            .copied()
            .ok_or(InputError::ButtonOutOfRange { index, count: MouseButton::COUNT })
    }

    pub(crate) fn age(&mut self) {
        self.buttons.iter_mut().for_each(DigitalKey::age);
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl MouseButton {
    pub const COUNT: usize = 3;
}

impl Index<MouseButton> for MouseState {
    type Output = DigitalKey;
    fn index(&self, button: MouseButton) -> &Self::Output {
        &self.buttons[button as usize]
    }
}

impl IndexMut<MouseButton> for MouseState {
    fn index_mut(&mut self, button: MouseButton) -> &mut DigitalKey {
        &mut self.buttons[button as usize]
    }
}

/// Up/down state of one key plus the state it had before the last tick.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct DigitalKey {
    curr: bool,
    prev: bool,
}

#[allow(dead_code)]
impl DigitalKey {
    #[inline(always)] pub fn is_down(self) -> bool { self.curr }
    #[inline(always)] pub fn is_up(self) -> bool { !self.curr }

    /// Went down during the last tick. A press and release inside one tick is lost.
    #[inline(always)] pub fn pressed(self) -> bool { self.curr && !self.prev }
    #[inline(always)] pub fn released(self) -> bool { !self.curr && self.prev }

    #[inline(always)]
    pub fn update(&mut self, new: bool) {
        self.prev = self.curr;
        self.curr = new;
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, down: bool) {
        self.curr = down;
    }

    #[inline(always)]
    pub(crate) fn age(&mut self) {
        self.prev = self.curr;
    }
}

/// Backend-independent key identifiers. Each backend maps its native codes onto these.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    Backspace,
    Tab,
    Enter,
    Shift,
    Ctrl,
    Alt,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    PrintScreen,
    Insert,
    Delete,
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    N0, N1, N2, N3, N4, N5, N6, N7, N8, N9,
    NMul,
    NAdd,
    NSub,
    NDec,
    NDiv,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    LShift,
    RShift,
    LCtrl,
    RCtrl,
    LAlt,
    RAlt,
    Semicolon,
    Plus,
    Comma,
    Minus,
    Period,
    Slash,
    Tilde,
    LBracket,
    Backslash,
    RBracket,
    Quote,
}

impl Key {
    pub const COUNT: usize = 112;

    pub fn variants() -> core::slice::Iter<'static, Self> {
        use self::Key::*;
        const VARIANTS: [Key; Key::COUNT] = [
            Backspace, Tab, Enter, Shift, Ctrl, Alt, CapsLock, Escape,
            Space, PageUp, PageDown, End, Home, Left, Up, Right, Down,
            PrintScreen, Insert, Delete,
            D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,
            A, B, C, D, E, F, G, H, I, J, K, L, M,
            N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            N0, N1, N2, N3, N4, N5, N6, N7, N8, N9,
            NMul, NAdd, NSub, NDec, NDiv,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
            LShift, RShift, LCtrl, RCtrl, LAlt, RAlt,
            Semicolon, Plus, Comma, Minus, Period, Slash, Tilde,
            LBracket, Backslash, RBracket, Quote,
        ];

        VARIANTS.iter()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::variants().nth(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_in_discriminant_order() {
        assert_eq!(Key::variants().len(), Key::COUNT);
        for (i, &key) in Key::variants().enumerate() {
            assert_eq!(key as usize, i, "{:?}", key);
            assert_eq!(Key::from_index(i), Some(key));
        }
        assert_eq!(Key::from_index(Key::COUNT), None);
    }

    #[test]
    fn digital_key_edges() {
        let mut key = DigitalKey::default();
        assert!(key.is_up() && !key.pressed() && !key.released());

        key.update(true);
        assert!(key.is_down() && key.pressed());

        key.age();
        assert!(key.is_down() && !key.pressed());

        key.age();
        key.set(false);
        assert!(key.is_up() && key.released());
    }

    #[test]
    fn raw_lookups_are_bounds_checked() {
        let mut keyboard = KeyboardState::default();
        keyboard[Key::Z].set(true);
        assert!(keyboard.by_index(Key::Z as usize).unwrap().is_down());
        assert_eq!(
            keyboard.by_index(Key::COUNT),
            Err(InputError::KeyOutOfRange { index: Key::COUNT, count: Key::COUNT }),
        );

        let mouse = MouseState::default();
        assert!(mouse.by_index(MouseButton::Middle as usize).unwrap().is_up());
        assert_eq!(
            mouse.by_index(16),
            Err(InputError::ButtonOutOfRange { index: 16, count: MouseButton::COUNT }),
        );
    }
}
