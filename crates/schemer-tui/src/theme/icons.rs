//! Icon sets for Unicode and ASCII fallback.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Standard Unicode symbols.
    #[default]
    Unicode,
    /// ASCII-only fallback (also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Pick the icon mode from the environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Marker in front of the selected list entry.
    pub fn selected(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▸ ",
            IconMode::Ascii => "> ",
        }
    }

    /// Marker above the selected swatch.
    pub fn swatch_cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▼",
            IconMode::Ascii => "v",
        }
    }

    pub fn idle(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "●",
            IconMode::Ascii => "[*]",
        }
    }

    pub fn loading(&self, tick: usize) -> &'static str {
        const UNICODE: [&str; 4] = ["◐", "◓", "◑", "◒"];
        const ASCII: [&str; 4] = ["|", "/", "-", "\\"];
        match self.mode {
            IconMode::Unicode => UNICODE[tick % UNICODE.len()],
            IconMode::Ascii => ASCII[tick % ASCII.len()],
        }
    }

    pub fn failed(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "✗",
            IconMode::Ascii => "[x]",
        }
    }

    pub fn copied(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "✓",
            IconMode::Ascii => "[ok]",
        }
    }
}
