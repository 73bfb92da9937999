use crate::draw::DrawList;
use crate::error::RenderError;
use dobble_types::CardIndex;
use std::fmt::Debug;
use std::io::Write;

/// Turns one card's draw list into an output document.
///
/// Object safe, so the pipeline can hold a `Box<dyn CardRenderer>`.
pub trait CardRenderer: Send + Sync + Debug {
    /// Extension of the files this renderer produces, without the dot.
    fn file_extension(&self) -> &'static str;

    fn render(&self, card: &DrawList, out: &mut dyn Write) -> Result<(), RenderError>;

    /// `<index>.<ext>`, the name a card's output file gets.
    fn file_name(&self, index: CardIndex) -> String {
        format!("{}.{}", index, self.file_extension())
    }
}
