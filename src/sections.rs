// The five gated content sections.
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Ordered section identifiers. The declaration order is the unlock rank.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum SectionId {
    About,
    Works,
    Philosophy,
    Experiments,
    Contact,
}

/// Number of gated sections.
pub const SECTION_COUNT: usize = SectionId::COUNT;

impl SectionId {
    pub const ALL: [SectionId; SECTION_COUNT] = [
        SectionId::About,
        SectionId::Works,
        SectionId::Philosophy,
        SectionId::Experiments,
        SectionId::Contact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        SectionId::iter().nth(index)
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Works => "Works",
            SectionId::Philosophy => "Philosophy",
            SectionId::Experiments => "Experiments",
            SectionId::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, section) in SectionId::iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(SectionId::from_index(i), Some(section));
            assert_eq!(SectionId::ALL[i], section);
        }
        assert_eq!(SectionId::from_index(SECTION_COUNT), None);
    }

    #[test]
    fn display_uses_the_title() {
        assert_eq!(SectionId::Experiments.to_string(), "Experiments");
        assert_eq!(SectionId::Contact.to_string(), "Contact");
    }
}
