//! Modal dialog requests and their style bundles.
//!
//! DESIGN
//! ======
//! Dialogs are driven by plain request records owned by the caller. The
//! variant → style lookup is a closed enum mapping with an explicit default,
//! so unrecognized variant names land on the primary bundle.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Confirmation dialog flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Danger,
    Primary,
}

/// Fixed icon + class bundle for one dialog variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub icon: &'static str,
    pub icon_class: &'static str,
    pub confirm_class: &'static str,
}

const DANGER_STYLE: VariantStyle = VariantStyle {
    icon: "⚠",
    icon_class: "dialog__icon dialog__icon--danger",
    confirm_class: "btn btn--danger",
};

const PRIMARY_STYLE: VariantStyle = VariantStyle {
    icon: "ℹ",
    icon_class: "dialog__icon dialog__icon--primary",
    confirm_class: "btn btn--primary",
};

impl DialogVariant {
    /// Mapping for externally supplied variant names (`"danger"`,
    /// `"primary"`); anything unrecognized falls back to `Primary`. In-crate
    /// callers construct the enum directly.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "danger" => Self::Danger,
            _ => Self::Primary,
        }
    }

    pub fn style(self) -> VariantStyle {
        match self {
            Self::Danger => DANGER_STYLE,
            Self::Primary => PRIMARY_STYLE,
        }
    }
}

/// Text and flavor of an open confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub variant: DialogVariant,
}

impl Default for ConfirmationRequest {
    fn default() -> Self {
        Self {
            title: "Are you sure?".to_owned(),
            message: "This action cannot be undone.".to_owned(),
            confirm_text: "Confirm".to_owned(),
            cancel_text: "Cancel".to_owned(),
            variant: DialogVariant::Danger,
        }
    }
}

/// Acknowledgement dialog flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    #[default]
    Info,
}

impl MessageKind {
    /// Icon glyph; informational messages carry none.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("✔"),
            Self::Error => Some("✖"),
            Self::Info => None,
        }
    }

    /// CSS modifier for the dialog frame and button.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Text and flavor of an open acknowledgement dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub kind: MessageKind,
    pub title: String,
    pub message: String,
}
