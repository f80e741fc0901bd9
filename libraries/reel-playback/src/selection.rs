//! Random video selection
//!
//! Uniform choice over the eligible (unflagged) videos of a catalog.

use rand::seq::SliceRandom;
use rand::Rng;
use reel_core::{Video, VideoCatalog};

/// Pick one unflagged video uniformly at random
///
/// Returns `None` when every video is flagged or the catalog is empty.
pub fn choose_eligible<'a, C, R>(catalog: &'a C, rng: &mut R) -> Option<&'a Video>
where
    C: VideoCatalog + ?Sized,
    R: Rng + ?Sized,
{
    let eligible = catalog.eligible();
    eligible.choose(rng).copied()
}
