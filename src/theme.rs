use std::future::Future;

/// Applied when neither the settings store nor local storage has a theme.
pub const DEFAULT_THEME: &str = "themes/dark.css";

/// Colors pushed into the `Palette` global of the window, as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: u32,
    pub surface: u32,
    pub text: u32,
    pub muted: u32,
    pub accent: u32,
    pub error: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub label: &'static str,
    pub stylesheet: &'static str,
    pub colors: ThemeColors,
}

pub static THEMES: [ThemeOption; 4] = [
    ThemeOption {
        label: "Dark",
        stylesheet: "themes/dark.css",
        colors: ThemeColors {
            background: 0x1e1f22,
            surface: 0x2b2d31,
            text: 0xe6e6e6,
            muted: 0x9a9ca3,
            accent: 0x4f8cff,
            error: 0xff6b6b,
        },
    },
    ThemeOption {
        label: "Light",
        stylesheet: "themes/light.css",
        colors: ThemeColors {
            background: 0xf5f5f7,
            surface: 0xffffff,
            text: 0x1d1d1f,
            muted: 0x6e6e73,
            accent: 0x0a66d8,
            error: 0xc62828,
        },
    },
    ThemeOption {
        label: "Nord",
        stylesheet: "themes/nord.css",
        colors: ThemeColors {
            background: 0x2e3440,
            surface: 0x3b4252,
            text: 0xeceff4,
            muted: 0xa3adbf,
            accent: 0x88c0d0,
            error: 0xbf616a,
        },
    },
    ThemeOption {
        label: "Sepia",
        stylesheet: "themes/sepia.css",
        colors: ThemeColors {
            background: 0xf4ecd8,
            surface: 0xfbf5e6,
            text: 0x433422,
            muted: 0x7b6a55,
            accent: 0xa0522d,
            error: 0xb03a2e,
        },
    },
];

/// Position and entry of a stylesheet in [`THEMES`].
pub fn find_theme(stylesheet: &str) -> Option<(usize, &'static ThemeOption)> {
    THEMES
        .iter()
        .enumerate()
        .find(|(_, option)| option.stylesheet == stylesheet)
}

pub fn default_theme() -> &'static ThemeOption {
    &THEMES[0]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    TriggerClicked,
    OptionSelected,
    ClickedOutside,
    EscapePressed,
}

impl DropdownState {
    pub fn on(self, event: DropdownEvent) -> Self {
        match (self, event) {
            (DropdownState::Closed, DropdownEvent::TriggerClicked) => DropdownState::Open,
            (DropdownState::Open, DropdownEvent::TriggerClicked) => DropdownState::Closed,
            (_, DropdownEvent::OptionSelected)
            | (_, DropdownEvent::ClickedOutside)
            | (_, DropdownEvent::EscapePressed) => DropdownState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }
}

/// Where the startup theme may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    SettingsStore,
    LocalStorage,
    BuiltinDefault,
}

pub const RESOLUTION_ORDER: [ThemeSource; 3] = [
    ThemeSource::SettingsStore,
    ThemeSource::LocalStorage,
    ThemeSource::BuiltinDefault,
];

/// Tries each source in [`RESOLUTION_ORDER`]; the first non-empty answer wins.
pub async fn resolve_theme<F, Fut>(mut attempt: F) -> String
where
    F: FnMut(ThemeSource) -> Fut,
    Fut: Future<Output = Option<String>>,
{
    for source in RESOLUTION_ORDER {
        if let Some(theme) = attempt(source).await.filter(|t| !t.trim().is_empty()) {
            tracing::debug!(?source, %theme, "theme resolved");
            return theme;
        }
    }
    DEFAULT_THEME.to_string()
}
