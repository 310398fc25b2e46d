//! The conventional commit record and its components.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::parser;
use crate::Error;

const BREAKING_PHRASE: &str = "BREAKING CHANGE";
const BREAKING_ARROW: &str = "BREAKING-CHANGE";

/// A conventional commit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Commit<'a> {
    ty: Type<'a>,
    scopes: Vec<Scope<'a>>,
    description: &'a str,
    body: Option<&'a str>,
    breaking: bool,
    footers: Vec<Footer<'a>>,
}

impl<'a> Commit<'a> {
    /// Create a new Conventional Commit based on the provided commit message
    /// string.
    ///
    /// # Errors
    ///
    /// This function returns an error if the message does not conform to the
    /// Conventional Commit specification. The message either parses in full
    /// or not at all; there is no partial result.
    pub fn parse(message: &'a str) -> Result<Self, Error> {
        let (ty, scopes, bang, description, body, footers) =
            parser::parse(message).map_err(|_| Error::with_commit(message))?;

        let mut commit = Commit::new()
            .with_type(Type::new_unchecked(ty))
            .with_description(description);
        for scope in scopes {
            commit = commit.with_appended_scope(Scope::new_unchecked(scope));
        }
        if let Some(body) = body {
            commit = commit.with_body(body);
        }
        if bang {
            commit = commit.with_breaking();
        }
        for (key, separator, value) in footers {
            let key = FooterKey::new_unchecked(key);
            if key.breaking() {
                commit = commit.with_breaking();
            }
            commit = commit.with_appended_footer(Footer::new(key, separator.parse()?, value));
        }

        Ok(commit)
    }

    /// The type of the commit.
    pub fn type_(&self) -> Type<'a> {
        self.ty
    }

    /// The scopes of the commit, in the order they were written.
    ///
    /// A single-scope header like `feat(api): ...` yields a one-element
    /// slice; a header without a scope block yields an empty one.
    pub fn scopes(&self) -> &[Scope<'a>] {
        &self.scopes
    }

    /// The commit description.
    pub fn description(&self) -> &'a str {
        self.description
    }

    /// The commit body, containing a more detailed explanation of the commit
    /// changes.
    pub fn body(&self) -> Option<&'a str> {
        self.body
    }

    /// A flag to signal that the commit contains breaking changes.
    ///
    /// This flag is set either when the commit has an exclamation mark after
    /// the message type and scope, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// Or when a `BREAKING CHANGE:` / `BREAKING-CHANGE:` footer is defined:
    /// ```text
    /// feat: my commit description
    ///
    /// BREAKING CHANGE: this is a breaking change
    /// ```
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// Any footer.
    ///
    /// A footer is similar to a Git trailer, with the exception of not
    /// requiring whitespace before newlines.
    ///
    /// See: <https://git-scm.com/docs/git-interpret-trailers>
    pub fn footers(&self) -> &[Footer<'a>] {
        &self.footers
    }
}

/// Evolution operations.
///
/// The record is a value: each operation consumes the current record and
/// returns a new one with exactly one field replaced or appended to. The
/// grammar hands these well-formed substrings, so none of them can fail.
impl<'a> Commit<'a> {
    /// A record with every field at its empty or false default.
    pub(crate) fn new() -> Self {
        Self {
            ty: Type::new_unchecked(""),
            scopes: Vec::new(),
            description: "",
            body: None,
            breaking: false,
            footers: Vec::new(),
        }
    }

    pub(crate) fn with_type(mut self, ty: Type<'a>) -> Self {
        self.ty = ty;
        self
    }

    pub(crate) fn with_appended_scope(mut self, scope: Scope<'a>) -> Self {
        self.scopes.push(scope);
        self
    }

    pub(crate) fn with_description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    pub(crate) fn with_body(mut self, body: &'a str) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn with_appended_footer(mut self, footer: Footer<'a>) -> Self {
        self.footers.push(footer);
        self
    }

    /// Raises the breaking flag. Nothing lowers it again within a parse.
    pub(crate) fn with_breaking(mut self) -> Self {
        self.breaking = true;
        self
    }
}

/// A single footer.
///
/// A footer is similar to a Git trailer, with the exception of not requiring
/// whitespace before newlines.
///
/// See: <https://git-scm.com/docs/git-interpret-trailers>
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Footer<'a> {
    key: FooterKey<'a>,
    separator: FooterSeparator,
    value: &'a str,
}

impl<'a> Footer<'a> {
    /// Piece together a footer.
    pub const fn new(key: FooterKey<'a>, separator: FooterSeparator, value: &'a str) -> Self {
        Self {
            key,
            separator,
            value,
        }
    }

    /// The key of the footer, without its delimiter.
    pub const fn key(&self) -> FooterKey<'a> {
        self.key
    }

    /// The separator between the footer key and its value.
    pub const fn separator(&self) -> FooterSeparator {
        self.separator
    }

    /// The value of the footer.
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self.key.breaking()
    }
}

/// The type of separator between the footer key and value.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FooterSeparator {
    /// ": "
    ColonSpace,

    /// " #"
    SpacePound,
}

impl FooterSeparator {
    /// Access `str` representation of the separator.
    pub fn as_str(self) -> &'static str {
        match self {
            FooterSeparator::ColonSpace => ": ",
            FooterSeparator::SpacePound => " #",
        }
    }
}

impl Deref for FooterSeparator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for FooterSeparator {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for FooterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FromStr for FooterSeparator {
    type Err = Error;

    fn from_str(sep: &str) -> Result<Self, Self::Err> {
        match sep {
            ": " => Ok(FooterSeparator::ColonSpace),
            " #" => Ok(FooterSeparator::SpacePound),
            _ => Err(Error::new()),
        }
    }
}

macro_rules! unicase_components {
    ($($ty:ident),+) => (
        $(
            /// A component of the conventional commit.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty<'a>(unicase::UniCase<&'a str>);

            impl<'a> $ty<'a> {
                /// See `parse` for ensuring the data is valid.
                pub const fn new_unchecked(value: &'a str) -> Self {
                    $ty(unicase::UniCase::unicode(value))
                }

                /// Access `str` representation
                pub fn as_str(&self) -> &'a str {
                    self.0.into_inner()
                }
            }

            impl Deref for $ty<'_> {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.as_str()
                }
            }

            impl PartialEq<&'_ str> for $ty<'_> {
                fn eq(&self, other: &&str) -> bool {
                    *self == $ty::new_unchecked(*other)
                }
            }

            impl fmt::Display for $ty<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty<'_> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self)
                }
            }
        )+
    )
}

unicase_components![Type, Scope, FooterKey];

impl<'a> Type<'a> {
    /// Parse a `str` into a `Type`.
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let mut i = input;
        let t = parser::type_(&mut i).map_err(|_| Error::with_commit(input))?;
        if !i.is_empty() {
            return Err(Error::with_commit(input));
        }
        Ok(Type::new_unchecked(t))
    }
}

/// Common commit types
impl Type<'static> {
    /// Commit type when introducing new features (correlates with `minor` in semver)
    pub const FEAT: Type<'static> = Type::new_unchecked("feat");
    /// Commit type when patching a bug (correlates with `patch` in semver)
    pub const FIX: Type<'static> = Type::new_unchecked("fix");
    /// Possible commit type when reverting changes.
    pub const REVERT: Type<'static> = Type::new_unchecked("revert");
    /// Possible commit type for changing documentation.
    pub const DOCS: Type<'static> = Type::new_unchecked("docs");
    /// Possible commit type for changing code style.
    pub const STYLE: Type<'static> = Type::new_unchecked("style");
    /// Possible commit type for refactoring code structure.
    pub const REFACTOR: Type<'static> = Type::new_unchecked("refactor");
    /// Possible commit type for performance optimizations.
    pub const PERF: Type<'static> = Type::new_unchecked("perf");
    /// Possible commit type for addressing tests.
    pub const TEST: Type<'static> = Type::new_unchecked("test");
    /// Possible commit type for other things.
    pub const CHORE: Type<'static> = Type::new_unchecked("chore");
}

impl<'a> Scope<'a> {
    /// Parse a `str` into a `Scope`.
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let mut i = input;
        let s = parser::scope(&mut i).map_err(|_| Error::with_commit(input))?;
        if !i.is_empty() {
            return Err(Error::with_commit(input));
        }
        Ok(Scope::new_unchecked(s))
    }
}

impl<'a> FooterKey<'a> {
    /// Parse a `str` into a `FooterKey`.
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let mut i = input;
        let k = parser::footer_key(&mut i).map_err(|_| Error::with_commit(input))?;
        if !i.is_empty() {
            return Err(Error::with_commit(input));
        }
        Ok(FooterKey::new_unchecked(k))
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self == &BREAKING_PHRASE || self == &BREAKING_ARROW
    }
}
