// Compile-time environment resolution for build.rs.
// Also compiled into the library's tests.

/// Vite-era names accepted in place of the canonical ones
pub const ALIASES: &[(&str, &str)] = &[
    ("VITE_API_URL", "API_URL"),
    ("VITE_CLIENT_ID", "CLIENT_ID"),
];

pub fn canonical(key: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key)
}

/// `KEY=VALUE` lines; blanks and `#` comments are skipped, quotes trimmed
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        .collect()
}

/// Values to hand to rustc, keyed by canonical name.
///
/// Precedence per key: real canonical variable (nothing emitted, rustc
/// already sees it), real alias variable, `.env` canonical entry, `.env`
/// alias entry.
pub fn resolve<F>(dotenv: &[(String, String)], real: F) -> Vec<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let mut keys: Vec<&str> = Vec::new();
    for key in dotenv
        .iter()
        .map(|(key, _)| canonical(key))
        .chain(ALIASES.iter().map(|(_, canonical)| *canonical))
    {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    let from_file = |name: &str| {
        dotenv
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    keys.into_iter()
        .filter(|key| real(key).is_none())
        .filter_map(|key| {
            let aliases = || ALIASES.iter().filter(move |(_, c)| *c == key).map(|(alias, _)| *alias);
            aliases()
                .find_map(|alias| real(alias))
                .or_else(|| from_file(key))
                .or_else(|| aliases().find_map(|alias| from_file(alias)))
                .map(|value| (key.to_string(), value))
        })
        .collect()
}
