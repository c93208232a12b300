// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadrant Index: insert, query, move, remove.

use quadrant_index::{QuadTreeContainer, Rect};

fn main() {
    let mut world: QuadTreeContainer<f32, &str> =
        QuadTreeContainer::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let rock = world.insert("rock", Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
    let _tree = world.insert("tree", Rect::from_xywh(50.0, 50.0, 10.0, 10.0));
    let _bush = world.insert("bush", Rect::from_xywh(90.0, 90.0, 5.0, 5.0));

    let hits: Vec<_> = world
        .find(&Rect::new(40.0, 40.0, 70.0, 70.0))
        .into_iter()
        .filter_map(|k| world.get(k))
        .collect();
    println!("hits in (40,40)-(70,70): {hits:?}");

    // Move the rock next to the tree
    world.update(rock, Rect::from_xywh(62.0, 50.0, 4.0, 4.0)).unwrap();
    println!(
        "rock now lives in node {:?}",
        world.node_area(rock).unwrap()
    );

    world.remove(rock);
    println!("{} items, {} nodes", world.len(), world.collect_areas().len());
}
