//! # DWD Content
//!
//! Schema for everything editable on the landing page.
//!
//! ```text
//! content.data.json ──► Document ──► editor mutations ──► content.jsx
//! ```
//!
//! The page renderer reads one exported constant per top-level section, so
//! the shape of [`Document`] is the contract between the editor, the content
//! resource, and the generated module.

mod document;
mod error;
mod icons;
mod render;
mod suggest;
pub mod text;

pub use document::{
    About, Brand, Business, BusinessStep, CardLine, Contact, ContactForm, Document, Extra,
    Focus, FocusArea, Footer, FooterLink, Hero, HeroCard, Marquee, Network, NetworkNode, Portfolio,
    PortfolioItem, Section, TableHeaders, Team, TeamMember,
};
pub use error::ContentError;
pub use icons::IconKey;
pub use render::COUNT_TOKEN;
pub use suggest::{next_focus_id, next_member_id, next_portfolio_id, next_step_id};
