// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region list basics.
//!
//! Insert overlapping regions, hit-test points, remove one, and show that
//! keys stay stable and are never reused.
//!
//! Run:
//! - `cargo run -p plinth_demos --example region_basics`

use plinth_region::{Region, RegionList};

fn main() {
    let mut list: RegionList<f64, &str> = RegionList::new();
    let back = list.push(Region::new(0.0, 0.0, 100.0, 100.0), "back");
    let front = list.push(Region::new(50.0, 50.0, 100.0, 100.0), "front");

    // Earlier insertion wins where regions overlap.
    for (x, y) in [(25.0, 25.0), (75.0, 75.0), (125.0, 125.0), (100.0, 100.0), (200.0, 0.0)] {
        let hit = list.first_at(x, y).and_then(|k| list.get(k));
        let all: Vec<_> = list.query_point(x, y).collect();
        println!("({x}, {y}) -> first {hit:?}, all {all:?}");
    }

    let probe = Region::new(90.0, 90.0, 5.0, 5.0);
    println!("overlapping {probe:?}: {:?}", list.query_rect(probe).collect::<Vec<_>>());

    // Removing `back` exposes `front`; a new key never collides with old ones.
    let _ = list.remove(back);
    println!("after removal, (75, 75) -> {:?}", list.first_at(75.0, 75.0));
    let again = list.push(Region::new(0.0, 0.0, 100.0, 100.0), "again");
    println!("keys: back={back:?} front={front:?} again={again:?}");
    println!("order: {:?}", list.iter().map(|(_, _, p)| *p).collect::<Vec<_>>());
}
