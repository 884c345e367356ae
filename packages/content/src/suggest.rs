//! New-item templates and id suggestion for list sections.
//!
//! Ids are parsed leniently: anything that isn't a number counts as 0, so a
//! hand-edited id never blocks adding the next item.

use crate::{
    BusinessStep, CardLine, Document, Extra, FocusArea, FooterLink, IconKey, NetworkNode,
    PortfolioItem, TeamMember,
};

fn lenient_number(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

/// `F` + two-digit (max existing suffix + 1)
pub fn next_focus_id(areas: &[FocusArea]) -> String {
    let max = areas
        .iter()
        .map(|area| lenient_number(&area.id.replace('F', "")))
        .max()
        .unwrap_or(0);
    format!("F{:02}", max + 1)
}

pub fn next_member_id(members: &[TeamMember]) -> u64 {
    members.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

/// Zero-padded ordinal: `01`, `02`, ...
pub fn next_step_id(steps: &[BusinessStep]) -> String {
    let max = steps.iter().map(|s| lenient_number(&s.id)).max().unwrap_or(0);
    format!("{:02}", max + 1)
}

pub fn next_portfolio_id(items: &[PortfolioItem]) -> u64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

impl Document {
    /// First icon key listed in the document, or `Dna`
    pub fn default_icon_key(&self) -> String {
        self.icon_keys
            .first()
            .cloned()
            .unwrap_or_else(|| IconKey::DEFAULT.to_string())
    }

    pub fn new_focus_area(&self) -> FocusArea {
        FocusArea {
            id: next_focus_id(&self.focus.areas),
            title: "New Area".to_string(),
            kor: String::new(),
            desc: String::new(),
            code: String::new(),
            icon_key: self.default_icon_key(),
            extra: Extra::new(),
        }
    }

    pub fn new_team_member(&self) -> TeamMember {
        TeamMember {
            id: next_member_id(&self.team.members),
            name: "New Member".to_string(),
            role: String::new(),
            bio: String::new(),
            tags: Vec::new(),
            extra: Extra::new(),
        }
    }

    pub fn new_business_step(&self) -> BusinessStep {
        BusinessStep {
            id: next_step_id(&self.business.steps),
            title: "New Step".to_string(),
            desc: String::new(),
            icon_key: self.default_icon_key(),
            extra: Extra::new(),
        }
    }

    pub fn new_portfolio_item(&self) -> PortfolioItem {
        PortfolioItem {
            id: next_portfolio_id(&self.portfolio.items),
            name: "New Company".to_string(),
            category: String::new(),
            year: String::new(),
            image: String::new(),
            description: String::new(),
            highlights: Vec::new(),
            extra: Extra::new(),
        }
    }
}

impl NetworkNode {
    /// Dropped in the middle of the canvas
    pub fn placeholder() -> Self {
        Self {
            city: "New City".to_string(),
            x: 50.0,
            y: 50.0,
            extra: Extra::new(),
        }
    }
}

impl FooterLink {
    pub fn placeholder() -> Self {
        Self {
            label: "New Link".to_string(),
            href: "#".to_string(),
            extra: Extra::new(),
        }
    }
}

impl CardLine {
    pub fn placeholder() -> Self {
        Self {
            text: "NEW LINE".to_string(),
            accent: None,
            extra: Extra::new(),
        }
    }
}
