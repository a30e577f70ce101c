use std::sync::OnceLock;

use regex::Regex;

fn single_dash_long_flag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-([A-Za-z][A-Za-z0-9]+)(=.*)?$").expect("static pattern"))
}

/// Rewrites single-dash long flags such as `-numOfTables` into `--numOfTables`, so the
/// historical invocation style keeps working. Only names listed in `long_flags` are rewritten:
/// short flags (`-h`), double-dash flags, values that merely look like flags (`-abc`) and
/// anything after a bare `--` are left alone.
///
/// # Example Usage
/// ```
/// let args = schemagen::utils::normalize_args(
///     ["gen_tables", "-numOfTables", "4", "-prefix", "-abc", "-h"],
///     &["numOfTables", "prefix"],
/// );
/// assert_eq!(args, vec!["gen_tables", "--numOfTables", "4", "--prefix", "-abc", "-h"]);
/// ```
pub fn normalize_args<I, S>(args: I, long_flags: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::<String>::into)
        .enumerate()
        .map(|(position, arg)| {
            if position == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let is_known = single_dash_long_flag()
                .captures(&arg)
                .and_then(|captures| captures.get(1))
                .is_some_and(|name| long_flags.contains(&name.as_str()));
            if is_known {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
