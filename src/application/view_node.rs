// View node builder - Lays out the tiles of a view and the view picker
use crate::application::tile_node::{tile_node, tile_visual};
use crate::domain::node::{HostAction, Node};
use crate::domain::view::{View, ViewData};
use crate::domain::visual::ViewVisual;
use chrono::{DateTime, Utc};

pub fn view_visual(view: &View, data: &ViewData, now: DateTime<Utc>) -> ViewVisual {
    ViewVisual {
        id: view.id.clone(),
        name: view.name.clone(),
        tiles: data
            .tiles
            .iter()
            .map(|tile| tile_visual(tile, view, now))
            .collect(),
    }
}

pub fn view_node(visual: &ViewVisual) -> Node {
    Node::new("div")
        .id(visual.id.clone())
        .class("view")
        .child(Node::new("h1").class("text-center").text(visual.name.clone()))
        .child(
            Node::new("button")
                .class("btn btn-primary btn-xs")
                .attr("role", "button")
                .action(HostAction::RequestFullScreen)
                .child(Node::new("i").class("icon-expand"))
                .text(" Full screen"),
        )
        .child(
            Node::new("div").id("tiles").child(
                Node::new("div")
                    .class("tiles-wrapper")
                    .children(visual.tiles.iter().map(tile_node)),
            ),
        )
}

/// One link per view, badged with its tile count
pub fn view_list_node(views: &[View]) -> Node {
    Node::new("div").id("views").children(views.iter().map(|view| {
        Node::new("a")
            .id(view.id.clone())
            .class("btn btn-primary view")
            .attr("href", format!("dashboard/{}", view.name.to_lowercase()))
            .text(format!("{} ", view.name))
            .child(
                Node::new("span")
                    .class("badge")
                    .text(format!("{} tiles", view.tiles.len())),
            )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build::BuildStatus;
    use crate::domain::view::{Tile, TileRef};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 3, 1, 12, 0, 0).unwrap()
    }

    fn view() -> View {
        View {
            id: "v1".to_string(),
            name: "Backend Team".to_string(),
            tiles: vec![
                TileRef {
                    id: "b".to_string(),
                    label: "B".to_string(),
                },
                TileRef {
                    id: "a".to_string(),
                    label: "A".to_string(),
                },
            ],
            number_of_columns: None,
            default_number_of_branches_per_tile: 0,
        }
    }

    fn data() -> ViewData {
        let tile = |id: &str, status| Tile {
            id: id.to_string(),
            label: id.to_uppercase(),
            combined_build_status: status,
            builds: Vec::new(),
        };
        ViewData {
            tiles: vec![tile("b", BuildStatus::Failure), tile("a", BuildStatus::Success)],
        }
    }

    #[test]
    fn test_view_visual_preserves_tile_order() {
        let visual = view_visual(&view(), &data(), now());
        assert_eq!(visual.id, "v1");
        assert_eq!(visual.name, "Backend Team");
        let ids: Vec<&str> = visual.tiles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_view_node_chrome() {
        let node = view_node(&view_visual(&view(), &data(), now()));

        assert_eq!(node.id.as_deref(), Some("v1"));
        assert!(node.has_class("view"));
        assert_eq!(node.find_by_class("text-center").unwrap().text_content(), "Backend Team");

        let button = node.find_by_class("btn").unwrap();
        assert_eq!(button.action, Some(HostAction::RequestFullScreen));
        assert_eq!(button.text_content(), " Full screen");

        let wrapper = node.find_by_class("tiles-wrapper").unwrap();
        assert_eq!(wrapper.elements().count(), 2);
    }

    #[test]
    fn test_view_list_links() {
        let node = view_list_node(&[view()]);
        assert_eq!(node.id.as_deref(), Some("views"));

        let link = node.elements().next().unwrap();
        assert_eq!(link.id.as_deref(), Some("v1"));
        assert_eq!(link.attribute("href"), Some("dashboard/backend team"));
        assert_eq!(link.text_content(), "Backend Team 2 tiles");
        assert_eq!(link.find_by_class("badge").unwrap().text_content(), "2 tiles");
    }
}
