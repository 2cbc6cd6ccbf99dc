/// How long a toast stays before it starts sliding out (ms).
pub const NOTIFICATION_MS: u32 = 4000;
/// How long the tech-fact popup stays before fading (ms).
pub const POPUP_MS: u32 = 3000;
/// Exit animation length shared by toasts and popups (ms).
pub const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#27ae60",
            NotificationKind::Info => "#3498db",
        }
    }

    pub fn css(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 15px 20px; border-radius: 10px; z-index: 10000; max-width: 300px; \
             box-shadow: 0 5px 20px rgba(0, 0, 0, 0.2); animation: slideInRight 0.3s ease;",
            self.background()
        )
    }
}

pub const NOTIFICATION_EXIT: &str = "slideOutRight 0.3s ease forwards";

pub const POPUP_CLASS: &str = "tech-popup";
pub const POPUP_CSS: &str = "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
     background: rgba(0, 0, 0, 0.9); color: white; padding: 20px 30px; border-radius: 15px; \
     z-index: 10000; max-width: 400px; text-align: center; font-size: 1rem; line-height: 1.5; \
     box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5); animation: popupShow 0.3s ease;";
pub const POPUP_EXIT: &str = "popupHide 0.3s ease forwards";

/// Keyframes and cursor rules the toasts, popups, ripples and cage rely on.
pub const EXTRA_STYLES: &str = r#"
@keyframes slideInRight {
    from { opacity: 0; transform: translateX(100%); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slideOutRight {
    from { opacity: 1; transform: translateX(0); }
    to { opacity: 0; transform: translateX(100%); }
}
@keyframes popupShow {
    from { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
    to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
}
@keyframes popupHide {
    from { opacity: 1; transform: translate(-50%, -50%) scale(1); }
    to { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
}
@keyframes ripple {
    to { transform: scale(2); opacity: 0; }
}
.rotating-cage { cursor: grab; }
.rotating-cage:active { cursor: grabbing; }
"#;
