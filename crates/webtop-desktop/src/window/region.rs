//! Chrome press-target classification

/// What part of a window's chrome a press landed on
///
/// Supplied by the markup layer when it forwards a press; only the header
/// and tab are legal drag handles. Presses on controls and form elements
/// never start a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeTarget {
    /// Window title bar
    Header,
    /// Window tab strip
    Tab,
    /// Close/minimize/maximize button cluster
    Controls,
    /// An input or textarea inside the chrome
    Input,
    /// A button element inside the chrome
    Button,
    /// An anchor element inside the chrome
    Link,
}

impl ChromeTarget {
    /// Whether a press on this target may start a drag session
    #[inline]
    pub fn is_drag_handle(&self) -> bool {
        matches!(self, ChromeTarget::Header | ChromeTarget::Tab)
    }
}
