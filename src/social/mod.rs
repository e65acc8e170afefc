//! Follow graph, profile and people views
//!
//! Follow state is never patched locally: every follow or unfollow is
//! followed by a full refetch of the following list.

mod graph;
mod people;
mod profile;

pub use graph::FollowGraph;
pub use people::PeopleDirectory;
pub use profile::{ProfileTab, ProfileView};
