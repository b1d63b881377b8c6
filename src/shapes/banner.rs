#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Success,
    Info,
    Danger,
}

/// Single-line status message shown atop a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub style: BannerStyle,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            style: BannerStyle::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            style: BannerStyle::Info,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            style: BannerStyle::Danger,
            text: text.into(),
        }
    }
}
