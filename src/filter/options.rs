/// Autocomplete candidates: items containing `input`, ignoring case, in item order.
///
/// Nothing is suggested when the only candidate is exactly what was typed.
pub fn suggest<'a>(items: &'a [String], input: &str) -> Vec<&'a str> {
    let needle = input.to_lowercase();
    let matches = items.iter()
        .map(String::as_str)
        .filter(|item| item.to_lowercase().contains(&needle))
        .collect::<Vec<_>>();

    match matches.as_slice() {
        [only] if only.to_lowercase() == needle => Vec::new(),
        _ => matches,
    }
}
