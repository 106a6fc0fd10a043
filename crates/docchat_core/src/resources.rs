/// Splits raw resource-list text into identifiers.
///
/// Tokens are separated by any run of whitespace or commas. Empty tokens are
/// dropped; nothing is validated, deduplicated or normalized.
pub fn parse_resource_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
