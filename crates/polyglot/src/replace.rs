//! Call-site substitution of literal targets.
//!
//! Targets are plain substrings such as `%player%`, replaced in the order
//! given. Each pair operates on the output of the previous pair, so a
//! replacement may itself be rewritten by a later target:
//!
//! ```
//! use polyglot::multi_replace;
//!
//! assert_eq!(multi_replace("A", &["A", "B", "B", "C"]).unwrap(), "C");
//! ```

use crate::error::Error;

/// Apply each `(target, replacement)` pair of a flat list in order.
///
/// An empty list returns `text` unchanged. An odd-length list fails with
/// [`Error::UnpairedReplacement`].
pub fn multi_replace<S: AsRef<str>>(text: &str, targets_and_replacements: &[S]) -> Result<String, Error> {
    if targets_and_replacements.is_empty() {
        return Ok(text.to_owned());
    }
    check_paired(targets_and_replacements.len())?;
    Ok(replace_pairs(
        text,
        targets_and_replacements
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref(), pair[1].as_ref())),
    ))
}

/// Split on `\n` or `\r\n`, keeping empty lines including trailing ones.
///
/// ```
/// use polyglot::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\n\n"), vec!["a", "b", "", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    let last = lines.len().saturating_sub(1);
    for line in lines.iter_mut().take(last) {
        if line.ends_with('\r') {
            line.pop();
        }
    }
    lines
}

/// A validated list of `(target, replacement)` pairs.
///
/// Build with [`TargetsAndReplacements::new`] from a flat list, with
/// [`TargetsAndReplacements::from_pairs`], or with the [`tar!`](crate::tar)
/// macro.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetsAndReplacements {
    pairs: Vec<(String, String)>,
}

impl TargetsAndReplacements {
    /// No substitutions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Pair up a flat `[target, replacement, target, replacement, ...]` list.
    pub fn new<S: Into<String>>(flat: Vec<S>) -> Result<Self, Error> {
        check_paired(flat.len())?;
        let mut pairs = Vec::new();
        let mut items = flat.into_iter().map(Into::into);
        while let (Some(target), Some(replacement)) = (items.next(), items.next()) {
            pairs.push((target, replacement));
        }
        Ok(Self { pairs })
    }

    pub fn from_pairs<T, R>(pairs: impl IntoIterator<Item = (T, R)>) -> Self
    where
        T: Into<String>,
        R: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(target, replacement)| (target.into(), replacement.into()))
                .collect(),
        }
    }

    /// Append one pair, applied after the existing ones.
    pub fn push(&mut self, target: impl Into<String>, replacement: impl Into<String>) {
        self.pairs.push((target.into(), replacement.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(t, r)| (t.as_str(), r.as_str()))
    }

    /// Run the substitutions over `text`.
    pub fn apply(&self, text: &str) -> String {
        replace_pairs(text, self.pairs())
    }
}

fn check_paired(len: usize) -> Result<(), Error> {
    if len % 2 != 0 {
        return Err(Error::UnpairedReplacement { len });
    }
    Ok(())
}

fn replace_pairs<'a>(text: &str, pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut result = text.to_owned();
    for (target, replacement) in pairs {
        result = result.replace(target, replacement);
    }
    result
}
