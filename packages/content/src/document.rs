//! # Content Document
//!
//! Typed view of `content.data.json`. Every section the page renders from
//! has a struct here; field order matches the emitted module.
//!
//! Optional values (`Section::title_lines`, `CardLine::accent`) are left out
//! of the JSON when unset, the same way the hand-written data omits them.
//!
//! Keys the schema doesn't know about are kept in each struct's `extra` map
//! and written back after the known fields, so a load/edit/save cycle never
//! drops them.

use crate::ContentError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

/// Keys without a typed field, kept verbatim
pub type Extra = Map<String, Value>;

/// Root aggregate backing the whole page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub brand: Brand,
    pub icon_keys: Vec<String>,
    pub sections: Vec<Section>,
    pub hero: Hero,
    pub marquee: Marquee,
    pub about: About,
    pub focus: Focus,
    pub team: Team,
    pub business: Business,
    pub network: Network,
    pub portfolio: Portfolio,
    pub contact: Contact,
    pub footer: Footer,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Brand mark shown in the top-left navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub left: String,
    pub dot: String,
    pub right: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Navigation entry + section header.
///
/// `id` anchors the rendered `<section>`; list order is nav order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub nav_label: String,
    pub number: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_lines: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title_lines: Vec<String>,
    pub subtitle_lines: Vec<String>,
    pub card: HeroCard,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCard {
    pub icon_key: String,
    pub lines: Vec<CardLine>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLine {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marquee {
    pub primary: String,
    pub secondary: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub headline_line: String,
    pub headline_highlight: String,
    pub mission_title: String,
    pub mission_text: String,
    pub vision_title: String,
    pub vision_text: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Focus {
    pub areas: Vec<FocusArea>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Focus area card. `id` follows the `F01`, `F02`, ... pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub id: String,
    pub title: String,
    pub kor: String,
    pub desc: String,
    pub code: String,
    pub icon_key: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<TeamMember>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub steps: Vec<BusinessStep>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Business process card. `id` is the zero-padded ordinal shown behind the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStep {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub icon_key: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub status_label: String,
    /// `{count}` is replaced with the node count at render time
    pub status_lines: Vec<String>,
    pub nodes: Vec<NetworkNode>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// City on the network canvas; `x`/`y` are percentages of the canvas area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub city: String,
    #[serde(serialize_with = "compact_number")]
    pub x: f64,
    #[serde(serialize_with = "compact_number")]
    pub y: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub table_headers: TableHeaders,
    pub investment_label: String,
    pub milestones_label: String,
    pub visit_label: String,
    pub items: Vec<PortfolioItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHeaders {
    pub no: String,
    pub company: String,
    pub category: String,
    pub year: String,
    pub info: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub year: String,
    /// Full image URL
    pub image: String,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub pretitle: String,
    pub title_lines: Vec<String>,
    pub form: ContactForm,
    pub headquarters_label: String,
    pub headquarters_address_lines: Vec<String>,
    pub map_link_label: String,
    pub contact_label: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub message_placeholder: String,
    pub submit_label: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
    pub links: Vec<FooterLink>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    #[serde(flatten)]
    pub extra: Extra,
}

const SEED_JSON: &str = include_str!("../data/seed.json");

impl Document {
    /// Parse a document from JSON text
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Launch content shipped with the site
    pub fn seed() -> Result<Self, ContentError> {
        Self::from_json(SEED_JSON)
    }

    /// Look up a navigation section by its anchor id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Whole numbers are written without a fractional part (`80`, not `80.0`)
fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
