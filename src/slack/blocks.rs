//! Typed Block Kit payloads
//!
//! Only the subset the home tab needs: mrkdwn sections, dividers, and the
//! view that aggregates them.

use serde::Serialize;

/// A Block Kit block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Horizontal divider
    Divider,
    /// Section carrying a single text object
    Section {
        /// The section body
        text: TextObject,
    },
}

impl Block {
    /// Create a section block with mrkdwn text
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Section { text: TextObject::mrkdwn(text) }
    }
}

/// A Block Kit text object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    /// Text type, e.g. `mrkdwn`
    #[serde(rename = "type")]
    pub kind: String,
    /// The text itself
    pub text: String,
}

impl TextObject {
    /// Create a mrkdwn text object
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self { kind: "mrkdwn".to_string(), text: text.into() }
    }
}

/// A view payload published to a Slack surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Surface type, e.g. `home`
    #[serde(rename = "type")]
    pub kind: String,
    /// Identifier echoed back in view interactions
    pub callback_id: String,
    /// Blocks composing the view
    pub blocks: Vec<Block>,
}

/// Builder aggregating blocks into a [`View`]
#[derive(Debug)]
pub struct ViewBuilder {
    kind: String,
    callback_id: String,
    blocks: Vec<Block>,
}

impl ViewBuilder {
    /// Start a view for the given surface type and callback id
    #[must_use]
    pub fn new(kind: impl Into<String>, callback_id: impl Into<String>) -> Self {
        Self { kind: kind.into(), callback_id: callback_id.into(), blocks: Vec::new() }
    }

    /// Append a block to the view
    #[must_use]
    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Build the view from the aggregated blocks
    #[must_use]
    pub fn build(self) -> View {
        View { kind: self.kind, callback_id: self.callback_id, blocks: self.blocks }
    }
}
