//! Display surfaces for fragment streams.
//!
//! A surface is a pure sink: it receives fragments in order and shows them.
//! It owns no view logic and never alters the fragments it is handed.
//!
//! - [`TextPane`]: concatenated text plus style ranges, the in-memory
//!   equivalent of a rich text widget
//! - [`MarkdownPane`]: renders tags as Markdown markers
//!
//! ```
//! use ywview::display::{DisplaySurface, TextPane};
//! use ywview::fragment::{StyleTag, TaggedFragment};
//!
//! let mut pane = TextPane::new();
//! pane.render(&[
//!     TaggedFragment::new("Title\n", StyleTag::Heading1),
//!     TaggedFragment::plain("Body\n"),
//! ]);
//! assert_eq!(pane.text(), "Title\nBody\n");
//! assert_eq!(pane.spans()[0].range, 0..6);
//! ```

mod markdown;
mod pane;

pub use markdown::{MarkdownPane, render_markdown};
pub use pane::{TagSpan, TextPane};

use crate::fragment::TaggedFragment;

/// A presentation surface that shows one fragment stream at a time.
pub trait DisplaySurface {
    /// Remove all content, leaving an unstyled empty surface.
    fn clear(&mut self);

    /// Add one fragment after the current content.
    fn append(&mut self, fragment: &TaggedFragment);

    /// Replace the current content with `fragments`, in order.
    fn render(&mut self, fragments: &[TaggedFragment]) {
        self.clear();
        for fragment in fragments {
            self.append(fragment);
        }
    }
}
