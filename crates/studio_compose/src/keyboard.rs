//! Key handling for the prompt input.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    /// An IME (or other multi-keystroke) composition session is active
    pub composing: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            composing: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn composing(mut self) -> Self {
        self.composing = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit and suppress the newline the key would insert
    Submit,
    /// Ask the surrounding view to leave the composer
    Cancel,
    PassThrough,
}

impl KeyAction {
    pub fn prevents_default(&self) -> bool {
        matches!(self, KeyAction::Submit)
    }
}

pub fn classify(input: &KeyInput) -> KeyAction {
    match input.key {
        Key::Enter if !input.shift && !input.composing => KeyAction::Submit,
        Key::Escape => KeyAction::Cancel,
        _ => KeyAction::PassThrough,
    }
}
