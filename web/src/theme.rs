use crate::utils::*;
use gloo::utils::document_element;
use serde::{Deserialize, Serialize};

const THEME_ATTR: &str = "data-theme";

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl StorageKey for Theme {
    const KEY: &'static str = "whack:theme";
}

impl Theme {
    /// Choices offered in the settings dialog, `None` follows the browser.
    pub(crate) const CHOICES: [(&'static str, Option<Theme>); 3] = [
        ("Auto", None),
        ("Light", Some(Theme::Light)),
        ("Dark", Some(Theme::Dark)),
    ];

    const fn scheme(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub(crate) fn current() -> Option<Self> {
        LocalOrDefault::local_or_default()
    }

    pub(crate) fn init() {
        mark_root(Self::current());
    }

    pub(crate) fn apply(theme: Option<Self>) {
        theme.local_save();
        mark_root(theme);
    }
}

fn mark_root(theme: Option<Theme>) {
    let root = document_element();
    let marked = match theme {
        Some(theme) => root.set_attribute(THEME_ATTR, theme.scheme()),
        None => root.remove_attribute(THEME_ATTR),
    };
    if let Err(err) = marked {
        log::error!("could not apply theme {:?}: {:?}", theme, err);
    }
}
