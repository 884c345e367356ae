//! Longer edit sequences, the way the editor UI issues them
//!
//! This tests:
//! - Add + edit + reorder chains on one list
//! - Edits spread across several sections
//! - Document integrity after every step

use dwd_editor::mutations::{insert, move_item, remove_at, set, update_at};
use dwd_editor::{path, Document, Mutation};
use dwd_content::{FocusArea, NetworkNode, PortfolioItem};

fn seed() -> Document {
    Document::seed().unwrap()
}

#[test]
fn test_add_focus_area_then_edit_and_promote() {
    let doc = seed();
    let list = path!["focus", "areas"];

    // "+ Add Focus Area"
    let doc = insert(&doc, &list, doc.new_focus_area()).unwrap();
    assert_eq!(doc.focus.areas[6].id, "F07");

    // Type into the new card
    let doc = set(&doc, &list.child(6).child("title"), "Neuroscience").unwrap();
    let doc = set(&doc, &list.child(6).child("iconKey"), "Cpu").unwrap();

    // Press "up" twice
    let doc = move_item(&doc, &list, 6, 5).unwrap();
    let doc = move_item(&doc, &list, 5, 4).unwrap();

    let ids: Vec<_> = doc.focus.areas.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["F01", "F02", "F03", "F04", "F07", "F05", "F06"]);
    assert_eq!(doc.focus.areas[4].title, "Neuroscience");

    // Next suggestion still follows the highest id, not position
    assert_eq!(doc.new_focus_area().id, "F08");
}

#[test]
fn test_suggested_ids_after_removal() {
    let doc = seed();
    let members = path!["team", "members"];

    let doc = remove_at(&doc, &members, 1).unwrap();
    assert_eq!(doc.new_team_member().id, 5);

    let doc = remove_at(&doc, &members, 2).unwrap();
    let ids: Vec<_> = doc.team.members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(doc.new_team_member().id, 4);
}

#[test]
fn test_business_step_suggestion() {
    let doc = seed();
    let doc = insert(&doc, &path!["business", "steps"], doc.new_business_step()).unwrap();
    assert_eq!(doc.business.steps[3].id, "04");
    assert_eq!(doc.business.steps[3].title, "New Step");
    assert_eq!(doc.business.steps[3].icon_key, "Activity");
}

#[test]
fn test_network_nodes_drive_status_count() {
    let doc = seed();
    let nodes = path!["network", "nodes"];

    let doc = insert(&doc, &nodes, NetworkNode::placeholder()).unwrap();
    let doc = set(&doc, &nodes.child(6).child("city"), "Tokyo").unwrap();
    let doc = set(&doc, &nodes.child(6).child("x"), 88.5).unwrap();
    assert_eq!(doc.network.rendered_status_lines()[0], "CONNECTING_NODES: 7");

    let doc = remove_at(&doc, &nodes, 0).unwrap();
    let doc = remove_at(&doc, &nodes, 0).unwrap();
    assert_eq!(doc.network.rendered_status_lines()[0], "CONNECTING_NODES: 5");
    assert_eq!(doc.network.nodes[4].city, "Tokyo");
    assert_eq!(doc.network.nodes[4].x, 88.5);
}

#[test]
fn test_portfolio_display_number_follows_position() {
    let doc = seed();
    let items = path!["portfolio", "items"];

    let doc = insert(&doc, &items, doc.new_portfolio_item()).unwrap();
    let doc = move_item(&doc, &items, 4, 0).unwrap();

    let first: &PortfolioItem = &doc.portfolio.items[0];
    assert_eq!(first.id, 5);
    assert_eq!(dwd_content::Portfolio::display_number(0), "01");
    assert_eq!(doc.portfolio.items[1].name, "OncoMatrix");
}

#[test]
fn test_highlight_edit_through_update_at() {
    let doc = seed();
    let doc = update_at(&doc, &path!["portfolio", "items"], 2, |mut item: PortfolioItem| {
        item.highlights.retain(|h| !h.starts_with("Awarded"));
        item
    })
    .unwrap();

    assert_eq!(
        doc.portfolio.items[2].highlights,
        vec!["Series B Participant", "Successful Pilot in Mayo Clinic"]
    );
}

#[test]
fn test_serialized_mutation_batch() {
    let batch: Vec<Mutation> = serde_json::from_str(
        r#"[
            {"type": "set", "path": ["brand", "right"], "value": "BIO"},
            {"type": "insert", "path": ["footer", "links"], "item": {"label": "CAREERS", "href": "/careers"}},
            {"type": "moveItem", "path": ["footer", "links"], "from": 3, "to": 0},
            {"type": "removeAt", "path": ["hero", "card", "lines"], "index": 3}
        ]"#,
    )
    .unwrap();

    let doc = batch
        .iter()
        .try_fold(seed(), |doc, mutation| mutation.apply(&doc))
        .unwrap();

    assert_eq!(doc.brand.right, "BIO");
    assert_eq!(doc.footer.links[0].label, "CAREERS");
    assert_eq!(doc.footer.links.len(), 4);
    assert_eq!(doc.hero.card.lines.len(), 3);
}

#[test]
fn test_failed_step_leaves_previous_document_usable() {
    let doc = seed();
    let edited = set(&doc, &path!["marquee", "primary"], "NEW MARQUEE").unwrap();

    let result = set(&edited, &path!["focus", "areas", 9, "title"], "x");
    assert!(result.is_err());

    // The last good document is still intact and editable
    assert_eq!(edited.marquee.primary, "NEW MARQUEE");
    let areas: Vec<FocusArea> = dwd_editor::mutations::get(&edited, &path!["focus", "areas"]).unwrap();
    assert_eq!(areas.len(), 6);
}
