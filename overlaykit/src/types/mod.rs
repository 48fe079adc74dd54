mod color;
mod edges;
mod enums;
mod range;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Direction, HorizontalAlignment, HoverPolicy, LayoutStrategy, VerticalAlignment};
pub use range::ValueRange;
pub use style::Style;
