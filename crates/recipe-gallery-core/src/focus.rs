//! Keyboard focus trap for the open modal.
//!
//! The trap does not touch the DOM. The caller supplies the ordered list of
//! focusable elements and the currently focused one; the trap answers with
//! what should happen to a key press.

/// A focusable element inside the recipe modal, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusSlot {
    Close,
    PrevImage,
    NextImage,
    Video,
    /// Website link of the n-th location
    Website(usize),
    /// Map link of the n-th location
    Map(usize),
}

/// Element categories the trap considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    /// Anchor; only focusable when it carries an href
    Link { has_href: bool },
    Iframe,
}

/// Whether an element takes part in Tab navigation inside the modal.
pub fn is_focusable(kind: ElementKind) -> bool {
    match kind {
        ElementKind::Button | ElementKind::Iframe => true,
        ElementKind::Link { has_href } => has_href,
    }
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKey {
    Tab,
    Escape,
    Other,
}

impl TrapKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Tab" => TrapKey::Tab,
            "Escape" | "Esc" => TrapKey::Escape,
            _ => TrapKey::Other,
        }
    }
}

/// A key press as seen by the document-level handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: TrapKey,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: TrapKey, shift: bool) -> Self {
        Self { key, shift }
    }
}

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction<T> {
    /// Let the browser handle it
    Ignore,
    /// Close the modal
    Close,
    /// Move focus to `T` and suppress the default tab action
    Focus(T),
}

/// Confines Tab navigation to an ordered set of focusables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap<T> {
    order: Vec<T>,
}

impl<T: Copy + PartialEq> FocusTrap<T> {
    pub fn new(order: Vec<T>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[T] {
        &self.order
    }

    pub fn first(&self) -> Option<T> {
        self.order.first().copied()
    }

    pub fn last(&self) -> Option<T> {
        self.order.last().copied()
    }

    /// Decide what a key press does. Inert while the modal is closed.
    ///
    /// Tab on the last element wraps to the first, Shift+Tab on the first
    /// wraps to the last. When focus sits outside the trap (the page body,
    /// plain text inside the modal) Tab enters at the first element and
    /// Shift+Tab at the last. Tab anywhere else is left to the browser.
    pub fn on_key(&self, open: bool, press: KeyPress, active: Option<T>) -> KeyAction<T> {
        if !open {
            return KeyAction::Ignore;
        }
        match press.key {
            TrapKey::Escape => KeyAction::Close,
            TrapKey::Tab => {
                let (Some(first), Some(last)) = (self.first(), self.last()) else {
                    return KeyAction::Ignore;
                };
                match active.filter(|current| self.order.contains(current)) {
                    None if press.shift => KeyAction::Focus(last),
                    None => KeyAction::Focus(first),
                    Some(current) if press.shift && current == first => KeyAction::Focus(last),
                    Some(current) if !press.shift && current == last => KeyAction::Focus(first),
                    Some(_) => KeyAction::Ignore,
                }
            }
            TrapKey::Other => KeyAction::Ignore,
        }
    }
}
