//! Builds a tree from random input, skews it with out-of-range inserts, and
//! rebalances it, printing the structure and traversals at each step.
//!
//! Run with: cargo run --example demo

use balanced_bst::Tree;
use rand::Rng;

/// Generates `len` random values below `max`, duplicates and all.
fn random_values(len: usize, max: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..max)).collect()
}

fn main() {
    let values = random_values(15, 100);
    println!("input: {:?}", values);

    let mut tree = Tree::build(values);
    println!("\ninitial tree (balanced):\n{}", tree);
    println!("balanced: {}", tree.is_balanced());
    println!("level order: {:?}", tree.level_order());
    println!("pre order:   {:?}", tree.pre_order());
    println!("post order:  {:?}", tree.post_order());
    println!("in order:    {:?}", tree.in_order());

    for value in [101, 102, 103] {
        tree.insert(value);
    }
    println!("\nafter inserting values above 100 (unbalanced):\n{}", tree);
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    println!("\nafter rebalancing:\n{}", tree);
    println!("balanced: {}", tree.is_balanced());
    println!("level order: {:?}", tree.level_order());
    println!("pre order:   {:?}", tree.pre_order());
    println!("post order:  {:?}", tree.post_order());
    println!("in order:    {:?}", tree.in_order());
}
