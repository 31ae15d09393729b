use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The ten plant species the bundled leaf model distinguishes.
///
/// Declaration order matches the model's output vector: `index()` of a
/// variant is the position of its probability in the forward-pass
/// result. Reordering this list without retraining the model corrupts
/// every prediction silently, so the order is part of the model
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassLabel {
    SyzygiumCumini,
    OcimumTenuiflorum,
    CitrusLimon,
    BrassicaJuncea,
    PsidiumGuajava,
    PunicaGranatum,
    MangiferaIndica,
    Mentha,
    BasellaAlba,
    AzadirachtaIndica,
}

impl ClassLabel {
    /// All labels in model-output order.
    pub const ALL: [ClassLabel; 10] = [
        ClassLabel::SyzygiumCumini,
        ClassLabel::OcimumTenuiflorum,
        ClassLabel::CitrusLimon,
        ClassLabel::BrassicaJuncea,
        ClassLabel::PsidiumGuajava,
        ClassLabel::PunicaGranatum,
        ClassLabel::MangiferaIndica,
        ClassLabel::Mentha,
        ClassLabel::BasellaAlba,
        ClassLabel::AzadirachtaIndica,
    ];

    /// Label at `index` in the model's output vector, if in range.
    pub fn from_index(index: usize) -> Option<ClassLabel> {
        Self::ALL.get(index).copied()
    }

    /// Position of this label in the model's output vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical display name, e.g. "Mangifera Indica (Mango)".
    pub fn display_name(self) -> &'static str {
        match self {
            ClassLabel::SyzygiumCumini => "Syzygium Cumini (Jamun)",
            ClassLabel::OcimumTenuiflorum => "Ocimum Tenuiflorum (Tulsi)",
            ClassLabel::CitrusLimon => "Citrus Limon (Lemon)",
            ClassLabel::BrassicaJuncea => "Brassica Juncea (Indian Mustard)",
            ClassLabel::PsidiumGuajava => "Psidium Guajava (Guava)",
            ClassLabel::PunicaGranatum => "Punica Granatum (Pomegranate)",
            ClassLabel::MangiferaIndica => "Mangifera Indica (Mango)",
            ClassLabel::Mentha => "Mentha (Mint)",
            ClassLabel::BasellaAlba => "Basella Alba (Basale)",
            ClassLabel::AzadirachtaIndica => "Azadirachta Indica (Neem)",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string is not one of the canonical label names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown species label: {}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for ClassLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.display_name() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, label) in ClassLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(ClassLabel::from_index(i), Some(*label));
        }
        assert_eq!(ClassLabel::from_index(ClassLabel::ALL.len()), None);
    }

    #[test]
    fn first_and_last_positions_are_pinned() {
        // The model was trained against this ordering.
        assert_eq!(ClassLabel::from_index(0), Some(ClassLabel::SyzygiumCumini));
        assert_eq!(ClassLabel::from_index(2), Some(ClassLabel::CitrusLimon));
        assert_eq!(ClassLabel::from_index(9), Some(ClassLabel::AzadirachtaIndica));
    }

    #[test]
    fn display_names_round_trip() {
        for label in ClassLabel::ALL {
            let parsed: ClassLabel = label.display_name().parse().expect("canonical name parses");
            assert_eq!(parsed, label);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Ficus Carica (Fig)".parse::<ClassLabel>().unwrap_err();
        assert!(err.to_string().contains("Ficus"));
    }
}
