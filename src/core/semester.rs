/// Ordinal words the portal uses when naming a semester.
const NUMBER_MAP: [(&str, u8); 9] = [
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
];

/// Best-effort guess of the semester a notification is about.
///
/// Returns the number for the first whitespace-separated word that is an
/// ordinal from `first` to `ninth`. This is a keyword heuristic, not a
/// parser: "First Supplementary" in a description with no semester at all
/// still yields `Some(1)`.
pub fn extract_semester_num(description: &str) -> Option<u8> {
    description.to_lowercase().split_whitespace().find_map(|word| {
        NUMBER_MAP
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, num)| *num)
    })
}
