//! Universes of growing size.

/// Iterator over universes that double in size each step.
///
/// Starts from a single root item. Each step appends a copy of the current
/// universe with the step number suffixed to every name, so starting from
/// `"a"` the universes are `[a]`, `[a, a1]`, `[a, a1, a2, a12]`, and so on.
///
/// Names are distinct for the first [`MAX_DISTINCT_ROUNDS`] universes; past
/// that, multi-digit suffixes can collide (`a` + `12` versus `a` + `1` + `2`).
#[derive(Debug, Clone)]
pub struct DoublingUniverses {
    current: Vec<String>,
    round: usize,
}

/// Number of universes [`DoublingUniverses`] yields before names can repeat.
pub const MAX_DISTINCT_ROUNDS: usize = 12;

impl DoublingUniverses {
    /// Start from a single item named `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            current: vec![root.into()],
            round: 0,
        }
    }
}

impl Iterator for DoublingUniverses {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let universe = self.current.clone();
        self.round += 1;
        let suffix = self.round.to_string();
        let copies: Vec<String> = self
            .current
            .iter()
            .map(|name| format!("{name}{suffix}"))
            .collect();
        self.current.extend(copies);
        Some(universe)
    }
}
