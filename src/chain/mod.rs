//! # Chain Construction, Layout and Rendering Module
//!
//! ## Components
//!
//! ### Chain Building
//! - **ChainBuilder**: builds an arena-backed linked chain from a value
//!   sequence, optionally closing a cycle back to an earlier index
//! - **IndexTable**: maps node handles back to list positions
//!
//! ### Layout and Rendering
//! - **Layout**: places every slot on a horizontal strip at a fixed pitch, with
//!   a synthetic `None` slot after acyclic lists
//! - **StripRenderer**: draws a playback frame onto a character canvas
//!
//! ## Example
//!
//! ```
//! use cycle_stepper::chain::{SlotLabel, build_chain, layout};
//!
//! let chain = build_chain(&[10, 20, 30], None);
//! assert_eq!(chain.len(), 3);
//!
//! let layout = layout(&[10, 20, 30], None);
//! assert_eq!(layout.slots().len(), 4);
//! assert_eq!(layout.slots()[3].label, SlotLabel::Null);
//! ```

mod builder;
mod layout;
mod renderer;
mod types;

pub use builder::{ChainBuilder, build_chain};
pub use layout::{Layout, LayoutSlot, SlotLabel, layout};
pub use renderer::StripRenderer;
pub use types::{Chain, IndexTable, Node, NodeId};
