//! Home tab contents

use super::blocks::{Block, View, ViewBuilder};

/// Build the view published to a user's app home
#[must_use]
pub fn home_view() -> View {
    ViewBuilder::new("home", "home_view")
        .block(Block::markdown("*Welcome to your beerbox's home page*"))
        .block(Block::Divider)
        .block(Block::markdown("There is nothing fancy here yet, but much more is coming soon."))
        .build()
}
