// Tile node builder - Aggregates builds under a tile with its combined status
use crate::application::build_node::{build_node, build_visual};
use crate::application::status::{caption, classify};
use crate::domain::node::Node;
use crate::domain::view::{Tile, View};
use crate::domain::visual::TileVisual;
use chrono::{DateTime, Utc};

pub fn tile_visual(tile: &Tile, view: &View, now: DateTime<Utc>) -> TileVisual {
    let branches_per_tile = view.default_number_of_branches_per_tile;

    TileVisual {
        id: tile.id.clone(),
        label: tile.label.clone(),
        status: classify(tile.combined_build_status),
        combined_status_caption: caption(tile.combined_build_status),
        size_classes: [
            format!("height-{branches_per_tile}"),
            format!("width-{}", view.columns()),
        ],
        show_combined_status: tile.builds.is_empty(),
        // An empty tile with branches > 0 renders both sections
        show_build_list: branches_per_tile > 0,
        builds: tile
            .builds
            .iter()
            .map(|build| build_visual(build, now))
            .collect(),
    }
}

pub fn tile_node(visual: &TileVisual) -> Node {
    let [height, width] = &visual.size_classes;

    let mut node = Node::new("div")
        .id(visual.id.clone())
        .class("tile")
        .class(visual.status.label)
        .class(height)
        .class(width)
        .child(Node::new("h4").class("tile-title").text(visual.label.clone()));

    if visual.show_combined_status {
        node = node.child(
            Node::new("div")
                .class("text-center build-status")
                .child(Node::new("i").class(visual.status.icon_class))
                .text(format!(" {}", visual.combined_status_caption)),
        );
    }

    if visual.show_build_list {
        node = node.child(
            Node::new("div")
                .class("tile-builds")
                .children(visual.builds.iter().map(build_node)),
        );
    }

    node
}
