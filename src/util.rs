use std::fmt::{self, Display, Formatter};

pub(crate) type BuildHasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasher>;
pub type IndexSet<K> = indexmap::IndexSet<K, BuildHasher>;

/// Displays an iterator with a separator between the items, without
/// collecting into an intermediate string.
pub struct ListDisplay<TS>(pub TS, pub &'static str);

impl<TS> Display for ListDisplay<TS>
where
    TS: Clone + IntoIterator,
    TS::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut did_something = false;
        for item in self.0.clone() {
            if did_something {
                f.write_str(self.1)?;
            }
            Display::fmt(&item, f)?;
            did_something = true;
        }
        Ok(())
    }
}
