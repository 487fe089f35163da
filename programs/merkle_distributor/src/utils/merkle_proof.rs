use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::{INTERMEDIATE_PREFIX, LEAF_PREFIX};

/// Leaf committing to a claimant and both amounts of its allocation
///
/// The allocation is hashed first, then hashed again behind LEAF_PREFIX so a
/// leaf can never be mistaken for an intermediate node.
pub fn compute_leaf(claimant: &Pubkey, amount_unlocked: u64, amount_locked: u64) -> [u8; 32] {
    let node = hashv(&[
        &claimant.to_bytes(),
        &amount_unlocked.to_le_bytes(),
        &amount_locked.to_le_bytes(),
    ]);
    hashv(&[LEAF_PREFIX, &node.to_bytes()]).to_bytes()
}

/// Parent of two nodes, children hashed in ascending byte order
pub fn hash_intermediate(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[INTERMEDIATE_PREFIX, a, b]).to_bytes()
    } else {
        hashv(&[INTERMEDIATE_PREFIX, b, a]).to_bytes()
    }
}

/// Returns true if `leaf` folds up to `root` through `proof`.
/// An empty proof is valid only for a single-leaf tree.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed_hash = proof
        .iter()
        .fold(leaf, |computed, sibling| hash_intermediate(&computed, sibling));
    computed_hash == root
}
