//! Toast Notifications
//!
//! Ordered stack of transient success/error messages. Pure data; the
//! view layer owns the timers that hide and remove entries.

/// Auto-hide delay, matching Bootstrap's toast default
pub const DEFAULT_TOAST_DELAY_MS: u32 = 5000;
/// Length of the fade-out before a hidden toast leaves the tree
pub const TOAST_FADE_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Bootstrap contextual color
    pub fn css_variant(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Fade-out in progress
    pub hiding: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
    area_created: bool,
}

impl ToastStack {
    /// Append a toast, creating the notification area on first use
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.area_created = true;
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), kind, hiding: false });
        id
    }

    /// Start the fade-out. Returns false if the toast is gone or already hiding.
    pub fn begin_hide(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if !toast.hiding => {
                toast.hiding = true;
                true
            }
            _ => false,
        }
    }

    /// Drop the toast from the tree (after its fade completed)
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn area_created(&self) -> bool {
        self.area_created
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
