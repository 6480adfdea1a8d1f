/// One unit of declaration text, keyed by the asset it was emitted as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    pub text: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Fragments in merge order. Inserting a name that is already present
/// replaces its text without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    fragments: Vec<Fragment>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        let text = text.into();
        match self.fragments.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.text = text,
            None => self.fragments.push(Fragment::new(name, text)),
        }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.fragments.iter().map(|f| f.name.clone()).collect()
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for FragmentSet {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut set = FragmentSet::new();
        for (name, text) in iter {
            set.insert(name, text);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedDeclaration {
    pub text: String,
    pub fragment_names: Vec<String>,
    pub retained_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position_on_replace() {
        let mut set = FragmentSet::new();
        set.insert("a.d.ts", "one");
        set.insert("b.d.ts", "two");
        set.insert("a.d.ts", "three");

        assert_eq!(set.len(), 2);
        assert_eq!(set.names(), vec!["a.d.ts", "b.d.ts"]);
        assert_eq!(set.iter().next().unwrap().text, "three");
    }

    #[test]
    fn test_collect_preserves_order() {
        let set: FragmentSet = vec![("z.d.ts", "z"), ("a.d.ts", "a")].into_iter().collect();
        assert_eq!(set.names(), vec!["z.d.ts", "a.d.ts"]);
    }
}
