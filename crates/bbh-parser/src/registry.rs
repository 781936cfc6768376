use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::RegistryError;
use crate::tag::{CodeTag, ImageTag, LinkTag, PreTag, QuoteTag, SimpleTag, Tag};

/// Process wide default tag set, every [Registry::default] copies from it.
static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Mapping from tag name to its behavior.
///
/// Names are canonicalized to lowercase. Behaviors are shared between clones,
/// but adding or removing a tag only changes the registry it is called on.
#[derive(Clone)]
pub struct Registry {
    tags: HashMap<String, Arc<dyn Tag>>,
}

impl Registry {
    /// Construct a registry with no tag.
    pub fn empty() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// Construct a registry holding all built-in tags.
    ///
    /// | name    | html                                  |
    /// |---------|---------------------------------------|
    /// | `b`     | `<b>`                                 |
    /// | `i`     | `<i>`                                 |
    /// | `u`     | `<u>`                                 |
    /// | `s`     | `<strike>`                            |
    /// | `url`   | `<a href=".." rel="nofollow">`        |
    /// | `img`   | `<img src="..">`                      |
    /// | `quote` | `<blockquote class="quote">`          |
    /// | `pre`   | `<pre>`                               |
    /// | `code`  | `<pre><code>`                         |
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert_builtin("b", SimpleTag::new("b"));
        registry.insert_builtin("i", SimpleTag::new("i"));
        registry.insert_builtin("u", SimpleTag::new("u"));
        registry.insert_builtin("s", SimpleTag::new("strike"));
        registry.insert_builtin("url", LinkTag);
        registry.insert_builtin("img", ImageTag);
        registry.insert_builtin("quote", QuoteTag);
        registry.insert_builtin("pre", PreTag);
        registry.insert_builtin("code", CodeTag);
        registry
    }

    /// Associate a built-in `name`, already lowercase letters, with `tag`.
    pub(crate) fn insert_builtin(&mut self, name: &'static str, tag: impl Tag + 'static) {
        self.tags.insert(name.to_owned(), Arc::new(tag));
    }

    /// Associate `name` with `tag`, return the tag previously registered on
    /// that name if any.
    ///
    /// # Errors
    ///
    /// When `name` is not one or more ascii letters. Such a name never comes
    /// out of the lexer so the tag could not be used.
    pub fn register(
        &mut self,
        name: &str,
        tag: impl Tag + 'static,
    ) -> Result<Option<Arc<dyn Tag>>, RegistryError> {
        if name.is_empty() || !name.chars().all(|x| x.is_ascii_alphabetic()) {
            return Err(RegistryError::InvalidTagName(name.to_owned()));
        }
        Ok(self.tags.insert(name.to_ascii_lowercase(), Arc::new(tag)))
    }

    /// Remove the tag registered on `name`, return it if any.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tag>> {
        self.tags.remove(&name.to_ascii_lowercase())
    }

    /// Find the tag registered on `name`, case insensitive.
    pub fn find(&self, name: &str) -> Option<&dyn Tag> {
        self.tags.get(&name.to_ascii_lowercase()).map(Arc::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(&name.to_ascii_lowercase())
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.tags.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    /// Copy of the process wide default tag set.
    fn default() -> Self {
        DEFAULT_REGISTRY.get_or_init(Registry::builtin).clone()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tags", &self.names())
            .finish()
    }
}
