#![forbid(unsafe_code)]

//! Icon registry keyed by normalized names.
//!
//! [`IconRegistry`] maps a human-typed name (`"Vue.js"`, `"C++"`,
//! `"Tailwind CSS"`) to an opaque asset, grouped into named categories.
//! Categories are created on first insert and kept in insertion order, which
//! is also the order of the cross-category fallback search.
//!
//! # Invariants
//!
//! 1. Every stored key is the output of [`normalize`].
//! 2. Entries are never removed; inserting an existing key overwrites the
//!    asset in place and keeps the key's original position.
//! 3. [`IconRegistry::contains`] agrees with [`IconRegistry::lookup`].
//!
//! # Failure Modes
//!
//! | Scenario                              | Behavior                        |
//! |---------------------------------------|---------------------------------|
//! | Unknown name                          | `None`                          |
//! | Unknown category in `lookup`          | Falls back to all categories    |
//! | Unknown category in `lookup_in_category` | `warn!` event, `None`        |

use std::collections::HashMap;

/// Default category for [`IconRegistry::insert`].
pub const GENERAL: &str = "general";
/// Technology logos.
pub const TECH: &str = "tech";
/// Social-media logos.
pub const SOCIAL: &str = "social";

/// Lower-case `name` and drop whitespace, `.` and `-`.
///
/// ```
/// use folio_icons::normalize;
///
/// assert_eq!(normalize("Vue.js"), "vuejs");
/// assert_eq!(normalize("c ++"), "c++");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| !(is_separator_space(c) || c == '.' || c == '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whitespace stripped from keys: ASCII tab through carriage return, space,
/// the Unicode `Zs` spaces, the line/paragraph separators and the byte-order
/// mark. U+0085 (NEXT LINE) is kept.
fn is_separator_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// ---------------------------------------------------------------------------
// IconCategory
// ---------------------------------------------------------------------------

/// One named partition of the registry.
#[derive(Debug, Clone)]
pub struct IconCategory<A> {
    name: String,
    order: Vec<String>,
    entries: HashMap<String, A>,
}

impl<A> IconCategory<A> {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Category name as registered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the category holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Asset for an already-normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&A> {
        self.entries.get(key)
    }

    /// Normalized keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    fn put(&mut self, key: String, asset: A) -> Option<A> {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, asset)
    }
}

// ---------------------------------------------------------------------------
// IconRegistry
// ---------------------------------------------------------------------------

/// Registry of icon assets grouped by category.
#[derive(Debug, Clone)]
pub struct IconRegistry<A> {
    categories: Vec<IconCategory<A>>,
    index: HashMap<String, usize>,
}

impl<A> Default for IconRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> IconRegistry<A> {
    /// Create an empty registry with no categories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Resolve `name`, preferring `category` when it holds the key.
    ///
    /// Falls back to every category in insertion order and returns the first
    /// match.
    #[must_use]
    pub fn lookup(&self, name: &str, category: Option<&str>) -> Option<&A> {
        let key = normalize(name);
        if let Some(found) = category
            .and_then(|c| self.category(c))
            .and_then(|c| c.get(&key))
        {
            return Some(found);
        }
        self.categories.iter().find_map(|c| c.get(&key))
    }

    /// Resolve `name` inside one category only.
    ///
    /// An unknown category emits a warning and yields `None`.
    #[must_use]
    pub fn lookup_in_category(&self, name: &str, category: &str) -> Option<&A> {
        let Some(found) = self.category(category) else {
            tracing::warn!(category, "icon category does not exist");
            return None;
        };
        found.get(&normalize(name))
    }

    /// Whether `name` resolves, with the same fallback as [`lookup`](Self::lookup).
    #[must_use]
    pub fn contains(&self, name: &str, category: Option<&str>) -> bool {
        self.lookup(name, category).is_some()
    }

    /// Insert into the [`GENERAL`] category.
    pub fn insert(&mut self, name: &str, asset: A) -> Option<A> {
        self.insert_in(GENERAL, name, asset)
    }

    /// Insert into `category`, creating it if needed. Returns the replaced asset.
    pub fn insert_in(&mut self, category: &str, name: &str, asset: A) -> Option<A> {
        let key = normalize(name);
        self.category_entry(category).put(key, asset)
    }

    /// Bulk insert into a (possibly new) category.
    ///
    /// The category is created even when `entries` is empty.
    pub fn insert_category<I, K>(&mut self, category: &str, entries: I)
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
    {
        let target = self.category_entry(category);
        for (name, asset) in entries {
            target.put(normalize(name.as_ref()), asset);
        }
    }

    /// Category names in insertion order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(IconCategory::name).collect()
    }

    /// Normalized keys of one category, or of all categories de-duplicated
    /// in first-seen order. Unknown categories yield an empty list.
    #[must_use]
    pub fn names(&self, category: Option<&str>) -> Vec<&str> {
        match category {
            Some(name) => self
                .category(name)
                .map(|c| c.keys().collect())
                .unwrap_or_default(),
            None => {
                let mut seen = std::collections::HashSet::new();
                self.categories
                    .iter()
                    .flat_map(IconCategory::keys)
                    .filter(|key| seen.insert(*key))
                    .collect()
            }
        }
    }

    /// Access a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&IconCategory<A>> {
        self.index.get(name).map(|&i| &self.categories[i])
    }

    /// Total number of entries across categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(IconCategory::len).sum()
    }

    /// Whether no category holds an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(IconCategory::is_empty)
    }

    /// Read view bound to `category`.
    #[must_use]
    pub fn scoped<'a>(&'a self, category: &'a str) -> CategoryView<'a, A> {
        CategoryView {
            registry: self,
            category,
        }
    }

    /// Write view bound to `category`.
    pub fn scoped_mut<'a>(&'a mut self, category: &'a str) -> CategoryViewMut<'a, A> {
        CategoryViewMut {
            registry: self,
            category,
        }
    }

    /// Read view over [`TECH`].
    #[must_use]
    pub fn tech(&self) -> CategoryView<'_, A> {
        self.scoped(TECH)
    }

    /// Write view over [`TECH`].
    pub fn tech_mut(&mut self) -> CategoryViewMut<'_, A> {
        self.scoped_mut(TECH)
    }

    /// Read view over [`SOCIAL`].
    #[must_use]
    pub fn social(&self) -> CategoryView<'_, A> {
        self.scoped(SOCIAL)
    }

    /// Write view over [`SOCIAL`].
    pub fn social_mut(&mut self) -> CategoryViewMut<'_, A> {
        self.scoped_mut(SOCIAL)
    }

    fn category_entry(&mut self, name: &str) -> &mut IconCategory<A> {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.categories.push(IconCategory::new(name));
                let idx = self.categories.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.categories[idx]
    }
}

// ---------------------------------------------------------------------------
// Scoped views
// ---------------------------------------------------------------------------

/// Lookups restricted to one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryView<'a, A> {
    registry: &'a IconRegistry<A>,
    category: &'a str,
}

impl<'a, A> CategoryView<'a, A> {
    /// Same as [`IconRegistry::lookup_in_category`].
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a A> {
        self.registry.lookup_in_category(name, self.category)
    }

    /// Keys of the bound category.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        self.registry.names(Some(self.category))
    }
}

/// Inserts bound to one category.
#[derive(Debug)]
pub struct CategoryViewMut<'a, A> {
    registry: &'a mut IconRegistry<A>,
    category: &'a str,
}

impl<A> CategoryViewMut<'_, A> {
    /// Same as [`IconRegistry::insert_in`] with the bound category.
    pub fn insert(&mut self, name: &str, asset: A) -> Option<A> {
        self.registry.insert_in(self.category, name, asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IconRegistry<&'static str> {
        let mut reg = IconRegistry::new();
        reg.insert_category(TECH, [("Vue", "vue.svg"), ("Vue.js", "vue.svg"), ("C++", "cpp.svg")]);
        reg.insert_category(SOCIAL, [("GitHub", "github.svg")]);
        reg
    }

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize("Tailwind CSS"), "tailwindcss");
        assert_eq!(normalize("Discord.py"), "discordpy");
        assert_eq!(normalize("roblox-icon"), "robloxicon");
        assert_eq!(normalize(" \t\n"), "");
    }

    #[test]
    fn normalize_whitespace_class() {
        assert_eq!(normalize("\u{FEFF}Vue\u{3000}JS\u{A0}"), "vuejs");
        assert_eq!(normalize("a\u{2009}b\u{2028}c"), "abc");
        assert_eq!(normalize("a\u{85}b"), "a\u{85}b");
    }

    #[test]
    fn normalize_case_and_space_insensitive() {
        assert_eq!(normalize("C++"), normalize("c++"));
        assert_eq!(normalize("c ++"), normalize("c++"));
    }

    #[test]
    fn lookup_prefers_named_category() {
        let mut reg = sample();
        reg.insert_in(SOCIAL, "vue", "vue-social.svg");
        assert_eq!(reg.lookup("vue", Some(SOCIAL)), Some(&"vue-social.svg"));
        assert_eq!(reg.lookup("vue", Some(TECH)), Some(&"vue.svg"));
    }

    #[test]
    fn lookup_falls_back_in_category_order() {
        let mut reg = sample();
        reg.insert_in(SOCIAL, "vue", "vue-social.svg");
        assert_eq!(reg.lookup("VUE", None), Some(&"vue.svg"));
        assert_eq!(reg.lookup("GitHub", Some(TECH)), Some(&"github.svg"));
        assert_eq!(reg.lookup("github", Some("missing")), Some(&"github.svg"));
    }

    #[test]
    fn lookup_missing_is_none() {
        let reg = sample();
        assert_eq!(reg.lookup("rust", None), None);
        assert!(!reg.contains("rust", Some(TECH)));
    }

    #[test]
    fn lookup_in_category_is_strict() {
        let reg = sample();
        assert_eq!(reg.lookup_in_category("c ++", TECH), Some(&"cpp.svg"));
        assert_eq!(reg.lookup_in_category("github", TECH), None);
        assert_eq!(reg.lookup_in_category("github", "nope"), None);
    }

    #[test]
    fn insert_defaults_to_general_and_creates_it() {
        let mut reg = IconRegistry::new();
        assert!(reg.categories().is_empty());
        assert_eq!(reg.insert("Rust", "rust.svg"), None);
        assert_eq!(reg.categories(), [GENERAL]);
        assert_eq!(reg.lookup_in_category("rust", GENERAL), Some(&"rust.svg"));
    }

    #[test]
    fn overwrite_keeps_position_and_latest_asset() {
        let mut reg = sample();
        assert_eq!(reg.insert_in(TECH, "vue", "vue2.svg"), Some("vue.svg"));
        assert_eq!(reg.lookup_in_category("Vue", TECH), Some(&"vue2.svg"));
        assert_eq!(reg.names(Some(TECH)), ["vue", "vuejs", "c++"]);
    }

    #[test]
    fn empty_bulk_insert_still_creates_category() {
        let mut reg = sample();
        reg.insert_category(GENERAL, Vec::<(&str, &str)>::new());
        assert_eq!(reg.categories(), [TECH, SOCIAL, GENERAL]);
        assert!(reg.names(Some(GENERAL)).is_empty());
    }

    #[test]
    fn names_union_is_deduplicated() {
        let mut reg = sample();
        reg.insert_in(SOCIAL, "vue", "vue-social.svg");
        assert_eq!(reg.names(None), ["vue", "vuejs", "c++", "github"]);
        assert!(reg.names(Some("unknown")).is_empty());
    }

    #[test]
    fn scoped_views_bind_category() {
        let mut reg = sample();
        reg.social_mut().insert("LinkedIn", "linkedin.svg");
        reg.tech_mut().insert("Lua", "lua.svg");
        assert_eq!(reg.social().get("linkedin"), Some(&"linkedin.svg"));
        assert_eq!(reg.tech().get("linkedin"), None);
        assert_eq!(reg.tech().names(), ["vue", "vuejs", "c++", "lua"]);
    }

    #[test]
    fn len_counts_all_entries() {
        let reg = sample();
        assert_eq!(reg.len(), 4);
        assert!(!reg.is_empty());
        assert!(IconRegistry::<u8>::new().is_empty());
    }
}
