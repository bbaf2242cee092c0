// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the path router.
//!
//! | path          | screen                |
//! |---------------|-----------------------|
//! | `/`           | [`Screen::Home`]      |
//! | `/work`       | [`Screen::Work`] (no id) |
//! | `/work/:id`   | [`Screen::Work`] (id) |
//! | `/journal`    | [`Screen::Journal`]   |
//! | `/shop`       | [`Screen::Shop`]      |
//! | `/info`       | [`Screen::Info`]      |
//! | `/about`      | [`Screen::About`]     |
//! | `/gallery`    | [`Screen::Gallery`]   |
//! | `/contact`    | [`Screen::Contact`]   |
//! | anything else | [`Screen::NotFound`]  |

use std::fmt;

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    /// Work screen, optionally pinned to a body id.
    Work(Option<String>),
    Journal,
    Shop,
    Info,
    About,
    Gallery,
    Contact,
    /// Unknown route; keeps the requested path for display.
    NotFound(String),
}

impl Screen {
    /// Parses a route path. Leading and trailing slashes are optional.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/');
        let first = segments.next().unwrap_or_default();
        let second = segments.next();
        let rest = segments.next();

        match (first, second, rest) {
            ("", None, None) => Screen::Home,
            ("work", None, None) => Screen::Work(None),
            ("work", Some(id), None) if !id.is_empty() => Screen::Work(Some(id.to_string())),
            ("journal", None, None) => Screen::Journal,
            ("shop", None, None) => Screen::Shop,
            ("info", None, None) => Screen::Info,
            ("about", None, None) => Screen::About,
            ("gallery", None, None) => Screen::Gallery,
            ("contact", None, None) => Screen::Contact,
            _ => Screen::NotFound(format!("/{trimmed}")),
        }
    }

    /// Canonical path of the screen.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Screen::Home => "/".to_string(),
            Screen::Work(None) => "/work".to_string(),
            Screen::Work(Some(id)) => format!("/work/{id}"),
            Screen::Journal => "/journal".to_string(),
            Screen::Shop => "/shop".to_string(),
            Screen::Info => "/info".to_string(),
            Screen::About => "/about".to_string(),
            Screen::Gallery => "/gallery".to_string(),
            Screen::Contact => "/contact".to_string(),
            Screen::NotFound(path) => path.clone(),
        }
    }

    #[must_use]
    pub fn is_work(&self) -> bool {
        matches!(self, Screen::Work(_))
    }

    /// Route parameter of the Work screen.
    #[must_use]
    pub fn work_param(&self) -> Option<&str> {
        match self {
            Screen::Work(id) => id.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_route() {
        assert_eq!(Screen::from_path("/"), Screen::Home);
        assert_eq!(Screen::from_path(""), Screen::Home);
        assert_eq!(Screen::from_path("/work"), Screen::Work(None));
        assert_eq!(
            Screen::from_path("/work/coast"),
            Screen::Work(Some("coast".into()))
        );
        assert_eq!(Screen::from_path("/journal"), Screen::Journal);
        assert_eq!(Screen::from_path("/shop"), Screen::Shop);
        assert_eq!(Screen::from_path("/info"), Screen::Info);
        assert_eq!(Screen::from_path("/about"), Screen::About);
        assert_eq!(Screen::from_path("/gallery"), Screen::Gallery);
        assert_eq!(Screen::from_path("/contact"), Screen::Contact);
    }

    #[test]
    fn slashes_are_optional() {
        assert_eq!(Screen::from_path("work/b2/"), Screen::Work(Some("b2".into())));
        assert_eq!(Screen::from_path("/work/"), Screen::Work(None));
    }

    #[test]
    fn unknown_routes_are_not_found() {
        assert_eq!(
            Screen::from_path("/nope"),
            Screen::NotFound("/nope".into())
        );
        assert_eq!(
            Screen::from_path("/work/a/b"),
            Screen::NotFound("/work/a/b".into())
        );
    }

    #[test]
    fn paths_round_trip() {
        let screens = [
            Screen::Home,
            Screen::Work(None),
            Screen::Work(Some("b1".into())),
            Screen::Journal,
            Screen::Shop,
            Screen::Info,
            Screen::About,
            Screen::Gallery,
            Screen::Contact,
        ];
        for screen in screens {
            assert_eq!(Screen::from_path(&screen.path()), screen);
        }
    }

    #[test]
    fn work_param_only_on_work_screen() {
        assert_eq!(Screen::Work(Some("x".into())).work_param(), Some("x"));
        assert_eq!(Screen::Work(None).work_param(), None);
        assert_eq!(Screen::Journal.work_param(), None);
        assert!(Screen::Work(None).is_work());
        assert!(!Screen::Home.is_work());
    }
}
