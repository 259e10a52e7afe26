//! Active Route Resolver.
//!
//! A route key may contain dynamic segments such as `/user/:id`. To match
//! the current path, each `:name` token of every flat entry is replaced by
//! the matched parameter value, then the substituted key is compared with
//! the path (a single trailing `/` on the path is tolerated). The first
//! entry in flattener order wins.

use serde::{Deserialize, Serialize};

use navkit_protocol::{FlatRouteEntry, NavError, RouteParams, PARAM_PREFIX};

/// What to do with a `:name` token that has no (or an empty) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingParamPolicy {
    /// Keep the literal `:name` in the substituted key.
    #[default]
    PassThrough,
    /// Fail the substitution; the entry cannot match.
    Reject,
}

/// A flat entry matched against the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub entry: &'a FlatRouteEntry,
    /// Entry key with parameters substituted.
    pub path: String,
    pub params: RouteParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(ResolvedRoute<'a>),
    /// Nothing matched; the caller falls back to the home path.
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn matched(&self) -> Option<&ResolvedRoute<'a>> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NotFound => None,
        }
    }

    pub fn into_matched(self) -> Option<ResolvedRoute<'a>> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

/// Replace every `:name` token of `key` with `params[name]`.
pub fn replace_dynamic_params(
    key: &str,
    params: &RouteParams,
    policy: MissingParamPolicy,
) -> Result<String, NavError> {
    let mut replaced = String::with_capacity(key.len());
    let mut chars = key.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != PARAM_PREFIX {
            replaced.push(c);
            continue;
        }

        let name_start = start + c.len_utf8();
        let mut name_end = name_start;
        while let Some(&(i, next)) = chars.peek() {
            if !is_param_char(next) {
                break;
            }
            name_end = i + next.len_utf8();
            chars.next();
        }

        let name = &key[name_start..name_end];
        if name.is_empty() {
            replaced.push(c);
            continue;
        }

        match params.get(name).filter(|value| !value.is_empty()) {
            Some(value) => replaced.push_str(value),
            None => match policy {
                MissingParamPolicy::PassThrough => replaced.push_str(&key[start..name_end]),
                MissingParamPolicy::Reject => {
                    return Err(NavError::MissingParam {
                        key: key.to_string(),
                        param: name.to_string(),
                    })
                }
            },
        }
    }

    Ok(replaced)
}

/// Names of the dynamic parameters in `key`, in order of appearance.
pub fn dynamic_param_names(key: &str) -> Vec<&str> {
    key.split(PARAM_PREFIX)
        .skip(1)
        .filter_map(|rest| {
            let end = rest
                .char_indices()
                .find(|&(_, c)| !is_param_char(c))
                .map_or(rest.len(), |(i, _)| i);
            (end > 0).then(|| &rest[..end])
        })
        .collect()
}

fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find the entry for `current_path`.
pub fn resolve<'a>(
    current_path: &str,
    params: &RouteParams,
    flat: &'a [FlatRouteEntry],
    policy: MissingParamPolicy,
) -> Resolution<'a> {
    for entry in flat {
        let Ok(replaced) = replace_dynamic_params(&entry.key, params, policy) else {
            continue;
        };
        let with_slash = current_path.strip_suffix('/') == Some(replaced.as_str());
        if replaced == current_path || with_slash {
            tracing::debug!(path = current_path, key = %entry.key, "Resolved route");
            return Resolution::Matched(ResolvedRoute {
                entry,
                path: replaced,
                params: params.clone(),
            });
        }
    }

    tracing::debug!(path = current_path, "No route matches path");
    Resolution::NotFound
}
