//! Parsed email fragments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A plain-text email body split into fragments, in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    /// Build from fragments in scan order (last fragment of the email first).
    pub(crate) fn from_scan(mut fragments: Vec<Fragment>) -> Self {
        fragments.reverse();
        Self { fragments }
    }

    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    /// Fragments that are part of the reply the author actually wrote
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.hidden)
    }

    /// Render the visible reply: non-hidden fragments joined by newlines,
    /// with trailing whitespace removed.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let joined = self
            .visible_fragments()
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n");

        joined.trim_end().to_string()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visible_text())
    }
}

impl Index<usize> for Email {
    type Output = Fragment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fragments[index]
    }
}

impl<'a> IntoIterator for &'a Email {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// A run of lines sharing the same quoted-ness
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Text of the fragment, in reading order
    pub(crate) content: String,

    /// Quoted text from an earlier message (`>` markers or a quote header)
    pub(crate) quoted: bool,

    /// Sign-off block such as `-- \nName`
    pub(crate) signature: bool,

    /// Starts with a forwarded-message banner
    pub(crate) forwarded: bool,

    /// Below every fragment of original content, so left out of the reply
    pub(crate) hidden: bool,
}

impl Fragment {
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    #[must_use]
    pub const fn is_forwarded(&self) -> bool {
        self.forwarded
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
