//! partial themes
use {
    crate::{
        error::{PaletteError, Result},
        theme::{Theme, Token},
    },
    hashbrown::HashMap,
    serde_json::Value,
};

/// a partial [`Theme`], applied with [`ThemeStore::merge`](super::ThemeStore::merge)
///
/// values are free-form, nothing checks that a color token holds a color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    /// the overwritten tokens
    entries: HashMap<Token, String>,
}

impl ThemePatch {
    /// make an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// add a token to the patch
    pub fn with(mut self, token: Token, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// add a token to the patch, returning the value it replaced
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> Option<String> {
        self.entries.insert(token, value.into())
    }

    /// get the patched value of a token
    pub fn get(&self, token: Token) -> Option<&str> {
        self.entries.get(&token).map(String::as_str)
    }

    /// the number of patched tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// iterate over the patched tokens, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        Token::ALL
            .iter()
            .filter_map(move |t| self.get(*t).map(|v| (*t, v)))
    }

    /// merge another patch into this one, the other patch wins on conflicts
    pub fn extend(&mut self, other: ThemePatch) {
        self.entries.extend(other.entries);
    }

    /// build a new theme from `base` with every patched token overwritten
    pub fn apply_to(&self, base: &Theme) -> Theme {
        let mut theme = base.clone();

        for (token, value) in self.iter() {
            theme.set(token, value);
        }

        theme
    }

    /// parse a `key=value` assignment
    ///
    /// the value is everything after the first `=`, trimmed; it may be empty
    ///
    /// # Errors
    ///
    /// returns an error if there's no `=`
    /// returns an error if the key isn't a token name
    pub fn parse_assignment(assignment: &str) -> Result<(Token, String)> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| PaletteError::InvalidAssignment(assignment.to_string()))?;

        if key.trim().is_empty() {
            return Err(PaletteError::InvalidAssignment(assignment.to_string()));
        }

        Ok((key.parse()?, value.trim().to_string()))
    }

    /// build a patch from `key=value` assignments, later ones win
    ///
    /// # Errors
    ///
    /// returns an error if any assignment is malformed
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assignments
            .into_iter()
            .map(|a| Self::parse_assignment(a.as_ref()))
            .collect()
    }

    /// build a patch from a flat JSON object of token names to strings
    ///
    /// # Errors
    ///
    /// returns an error if `json` isn't a JSON object
    /// returns an error if a key isn't a token name
    /// returns an error if a value isn't a string
    pub fn from_json(json: &str) -> Result<Self> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(json)?;
        let mut patch = Self::new();

        for (key, value) in object {
            let token: Token = key.parse()?;

            match value {
                Value::String(s) => {
                    patch.insert(token, s);
                }
                other => {
                    return Err(PaletteError::InvalidPatchValue {
                        key,
                        found: describe_json(&other).to_string(),
                    });
                }
            }
        }

        Ok(patch)
    }
}

/// describe a json value for error messages
fn describe_json(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&Theme> for ThemePatch {
    fn from(theme: &Theme) -> Self {
        theme
            .iter()
            .map(|(token, value)| (token, value.to_string()))
            .collect()
    }
}

impl From<Theme> for ThemePatch {
    fn from(theme: Theme) -> Self {
        Self::from(&theme)
    }
}

impl FromIterator<(Token, String)> for ThemePatch {
    fn from_iter<I: IntoIterator<Item = (Token, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
