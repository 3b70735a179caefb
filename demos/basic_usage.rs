//! Basic usage example for linked-bst.
//!
//! This example walks through the core operations of the tree.

use linked_bst::LinkedBst;

fn main() {
    println!("=== Linked BST - Basic Usage Example ===\n");

    // Create a new tree for u32 items
    let mut tree = LinkedBst::<u32>::new();
    println!("Created empty tree (height {})", tree.height());

    // Add some items
    println!("\nAdding items: 5, 3, 8, 1, 4, 7, 9");
    for item in [5, 3, 8, 1, 4, 7, 9] {
        tree.add(item);
    }
    println!("Tree now contains {} items", tree.len());
    println!("\nShape (rotated, root on the left):\n{}", tree);

    // Check membership
    println!("Membership checks:");
    println!("  contains(4): {}", tree.contains(&4));
    println!("  contains(6): {}", tree.contains(&6));
    println!("  find(7): {:?}", tree.find(&7));

    // Traversals
    println!("\nTraversals:");
    println!("  inorder:    {:?}", tree.inorder());
    println!("  preorder:   {:?}", tree.iter().collect::<Vec<_>>());
    println!("  postorder:  {:?}", tree.postorder());
    println!("  levelorder: {:?}", tree.levelorder());

    // Remove a node with two children
    println!("\nRemoving 5 (the root, two children):");
    match tree.remove(&5) {
        Ok(item) => println!("  removed {}", item),
        Err(err) => println!("  error: {}", err),
    }
    println!("  new root: {:?}", tree.root().map(|n| n.data));
    println!("  inorder: {:?}", tree.inorder());

    // Removing a missing item is an error
    println!("\nRemoving 42 (absent):");
    if let Err(err) = tree.remove(&42) {
        println!("  error: {}", err);
    }

    // Navigate the set
    println!("\nNavigation:");
    println!("  successor(4, strict): {:?}", tree.successor(&4, true));
    println!("  successor(4, non-strict): {:?}", tree.successor(&4, false));
    println!("  predecessor(4, strict): {:?}", tree.predecessor(&4, true));
    println!("  successor(9, strict): {:?}", tree.successor(&9, true));

    // Range queries exclude both bounds
    println!("\nRange queries (open interval):");
    println!("  range_find(3, 8): {:?}", tree.range_find(&3, &8));
    println!("  range_find(0, 100): {:?}", tree.range_find(&0, &100));

    // Degenerate tree and rebalancing
    println!("\n=== Rebalancing ===\n");
    let mut chain: LinkedBst<u32> = (1..=15).collect();
    println!("Sorted input 1..=15:");
    println!("  height: {}", chain.height());
    println!("  balanced: {}", chain.is_balanced());

    chain.rebalance();
    println!("After rebalance:");
    println!("  height: {}", chain.height());
    println!("  balanced: {}", chain.is_balanced());
    println!("  root: {:?}", chain.root().map(|n| n.data));
    println!("\n{}", chain);

    println!("=== Example Complete ===");
}
