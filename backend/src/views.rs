//! View models for the dashboard shell and the commercial page.
//!
//! These are the JSON documents the front end renders; building them is pure
//! so they can be tested without a server.

use dashboard_common::{Theme, User};
use serde::Serialize;

use crate::context::NavigationSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Commercial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub search_placeholder: &'static str,
    pub notifications: u32,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub display_name: String,
    pub initials: String,
    pub role_front: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            display_name: user.display_name(),
            initials: user.initials(),
            role_front: user.role_front.clone(),
        }
    }
}

/// Fixed sidebar, header and the active content region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellView {
    pub sidebar: Vec<NavItem>,
    pub header: HeaderView,
    pub content: Page,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActEntryButton {
    pub id: &'static str,
    pub label: &'static str,
}

/// Filter bar wrapping the timeline and the data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPanel {
    pub sections: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommercialView {
    pub navigation: NavigationSnapshot,
    pub kpis: Vec<KpiCard>,
    pub act_entries: Vec<ActEntryButton>,
    pub filters: FilterPanel,
}

const SIDEBAR: [(&str, &str, &str, Page); 2] = [
    ("dashboard", "Tableau de bord", "/dashboard", Page::Dashboard),
    ("commercial", "Commercial", "/commercial", Page::Commercial),
];

pub fn shell(active: Page, theme: Theme, user: Option<&User>) -> ShellView {
    let sidebar = SIDEBAR
        .iter()
        .map(|&(id, label, href, page)| NavItem {
            id,
            label,
            href,
            active: page == active,
        })
        .collect();

    ShellView {
        sidebar,
        header: HeaderView {
            search_placeholder: "Rechercher...",
            notifications: 0,
            theme,
            user: user.map(UserSummary::from),
        },
        content: active,
    }
}

pub fn commercial(navigation: NavigationSnapshot) -> CommercialView {
    CommercialView {
        navigation,
        kpis: vec![
            KpiCard { id: "actes", label: "Actes du mois" },
            KpiCard { id: "chiffre_affaires", label: "Chiffre d'affaires" },
            KpiCard { id: "commissions", label: "Commissions" },
        ],
        act_entries: vec![ActEntryButton { id: "nouvel_acte", label: "Nouvel acte" }],
        filters: FilterPanel {
            sections: vec!["timeline", "table"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_common::{ProfileDocument, YearMonth};

    fn user() -> User {
        User::from_profile(
            "uid-1",
            ProfileDocument {
                prenom: "Jean".to_string(),
                nom: "Dupont".to_string(),
                email: "jean@x.com".to_string(),
                role: "agent".to_string(),
                role_front: "Agent".to_string(),
                etp: Some(1.0),
                genre: None,
            },
        )
    }

    #[test]
    fn test_shell_marks_active_page() {
        let view = shell(Page::Commercial, Theme::Dark, None);
        let active: Vec<_> = view.sidebar.iter().filter(|i| i.active).map(|i| i.id).collect();
        assert_eq!(active, vec!["commercial"]);
        assert_eq!(view.header.theme, Theme::Dark);
        assert!(view.header.user.is_none());
    }

    #[test]
    fn test_shell_header_user_summary() {
        let user = user();
        let view = shell(Page::Dashboard, Theme::Light, Some(&user));
        let summary = view.header.user.unwrap();
        assert_eq!(summary.display_name, "Jean Dupont");
        assert_eq!(summary.initials, "JD");
        assert_eq!(summary.role_front, "Agent");
    }

    #[test]
    fn test_commercial_view_carries_navigation() {
        let month = YearMonth::new(2026, 10).unwrap();
        let view = commercial(NavigationSnapshot {
            current_month: month,
            label: month.label_fr(),
            is_current_month: true,
            is_loading: false,
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["navigation"]["current_month"], "2026-10");
        assert_eq!(json["navigation"]["label"], "octobre 2026");
        assert_eq!(json["filters"]["sections"], serde_json::json!(["timeline", "table"]));
    }
}
