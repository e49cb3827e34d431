// Text-or-not view of a value handed to a batch.
//
// Host languages can pass arbitrary values in a batch. Rust string types
// are always text; bridges wrap their own dynamic values (JSON values, JS
// values, nullable C pointers) and decide what counts as text.

use std::borrow::Cow;

use crate::codec::Text;

/// A single element of a stemming batch.
pub trait BatchItem {
    /// The text carried by this item, or `None` if it is not a text value.
    fn as_text(&self) -> Option<Text<'_>>;

    /// Human-readable rendering of the item, used in error reports.
    fn describe(&self) -> String;
}

impl BatchItem for str {
    fn as_text(&self) -> Option<Text<'_>> {
        Some(Text::Str(self))
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl BatchItem for String {
    fn as_text(&self) -> Option<Text<'_>> {
        Some(Text::Str(self))
    }

    fn describe(&self) -> String {
        self.as_str().describe()
    }
}

impl BatchItem for Box<str> {
    fn as_text(&self) -> Option<Text<'_>> {
        Some(Text::Str(self))
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl BatchItem for Cow<'_, str> {
    fn as_text(&self) -> Option<Text<'_>> {
        Some(Text::Str(self))
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: BatchItem + ?Sized> BatchItem for &T {
    fn as_text(&self) -> Option<Text<'_>> {
        (**self).as_text()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
