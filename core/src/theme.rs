use alloc::string::String;
use alloc::vec::Vec;

/// Document class prefix shared by every theme.
pub const THEME_CLASS_PREFIX: &str = "theme-";

pub fn theme_class(theme: &str) -> String {
    let mut class = String::with_capacity(THEME_CLASS_PREFIX.len() + theme.len());
    class.push_str(THEME_CLASS_PREFIX);
    class.push_str(theme);
    class
}

/// A change of document theme produced by a board sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSwap {
    pub previous: Option<String>,
    pub next: String,
}

impl ThemeSwap {
    pub fn class_name(&self) -> String {
        theme_class(&self.next)
    }

    /// Rewrites a whitespace separated class list so that it carries exactly
    /// the new theme class. Unrelated classes are kept in order.
    ///
    /// A theme id containing whitespace spreads over several tokens, so every
    /// token of the previous theme class is dropped along with `theme-*` ones.
    pub fn rewrite(&self, class_list: &str) -> String {
        let previous = self.previous.as_deref().map(theme_class);
        let previous: Vec<&str> = previous
            .as_deref()
            .map_or_else(Vec::new, |class| class.split_whitespace().collect());
        let next = self.class_name();
        let mut classes: Vec<&str> = class_list
            .split_whitespace()
            .filter(|class| !class.starts_with(THEME_CLASS_PREFIX) && !previous.contains(class))
            .collect();
        classes.extend(next.split_whitespace());
        classes.join(" ")
    }
}
