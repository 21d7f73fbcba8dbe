use std::fmt;

/// A circumstance that may affect sleep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Experience {
    SleepDisorder,
    HealthCondition,
    PartTimeJob,
    LifestyleHabits,
    /// Mutually exclusive with every other tag.
    None,
}

impl Experience {
    /// The catalog, in display order.
    pub const ALL: [Experience; 5] = [
        Self::SleepDisorder,
        Self::HealthCondition,
        Self::PartTimeJob,
        Self::LifestyleHabits,
        Self::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SleepDisorder => "Sleep disorder",
            Self::HealthCondition => "Health condition",
            Self::PartTimeJob => "Part-time job",
            Self::LifestyleHabits => "Lifestyle habits",
            Self::None => "None",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The selected experience tags, kept in selection order.
///
/// Selecting `None` clears every other tag; selecting any other tag drops
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceSet {
    tags: Vec<Experience>,
}

impl ExperienceSet {
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Select or deselect a tag.
    pub fn toggle(&mut self, tag: Experience, selected: bool) {
        match (selected, tag) {
            (true, Experience::None) => {
                self.tags.clear();
                self.tags.push(Experience::None);
            }
            (true, tag) => {
                self.tags.retain(|t| *t != Experience::None);
                if !self.tags.contains(&tag) {
                    self.tags.push(tag);
                }
            }
            (false, tag) => self.tags.retain(|t| *t != tag),
        }
    }

    pub fn contains(&self, tag: Experience) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in the order they were selected.
    pub fn iter(&self) -> impl Iterator<Item = Experience> + '_ {
        self.tags.iter().copied()
    }

    /// Labels joined with `", "`, in selection order.
    pub fn joined(&self) -> String {
        self.tags
            .iter()
            .map(Experience::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
