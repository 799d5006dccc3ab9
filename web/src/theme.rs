use crate::utils::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn update_html(theme: Option<Self>) {
        let html = gloo::utils::document_element();
        let result = match theme {
            Some(theme) => html.set_attribute(Self::ATTR_NAME, theme.scheme()),
            None => html.remove_attribute(Self::ATTR_NAME),
        };
        if let Err(err) = result {
            log::error!("failed to update theme: {:?}", err);
        }
    }

    pub(crate) fn init() {
        Self::update_html(LocalOrDefault::local_or_default());
    }

    pub(crate) fn apply(theme: Option<Self>) {
        theme.local_save();
        Self::update_html(theme);
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "trinca:theme";
}
