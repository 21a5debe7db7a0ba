/// Canonical bed vocabulary, in the order the admin room form offers it.
pub const BED_OPTIONS: [&str; 8] = [
    "Single",
    "Double",
    "Queen",
    "King",
    "Twin Beds",
    "Bunk Bed",
    "Sofa Bed",
    "Murphy Bed",
];

/// Collapse a free-form bed list into a counted summary, e.g.
/// `["Queen", "queen", "King"]` becomes `"2 Queen, King"`. Matching is
/// case-insensitive after trimming; labels outside the canonical set are
/// dropped. Distinct labels keep first-encountered order.
pub fn format_bed_types(beds: &[String]) -> String {
    let mut counts: Vec<(&'static str, u32)> = Vec::new();

    for raw in beds {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();
        let label = match BED_OPTIONS.iter().find(|option| option.to_lowercase() == lower) {
            Some(label) => *label,
            None => continue,
        };
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    counts
        .iter()
        .map(|(label, count)| {
            if *count > 1 {
                format!("{} {}", count, label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
