use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// AccessorConvention

/// Which methods a synthesized stand-in treats as property accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessorConvention {
    /// `get_<x>` returning a value, or `is_<x>` returning `bool`.
    ///
    /// The camel-case spellings `getX` and `isX` are accepted too.
    #[default]
    Prefixed,
    /// Every zero-argument method returning a value.
    ///
    /// A leading `get_` (or `is_` on a boolean) is still stripped from the
    /// property name.
    Bare,
}

impl AccessorConvention {
    /// Returns the part of `method` that names the property, or `None` if
    /// the method is not an accessor under this convention.
    ///
    /// `returns` is the declared return type of the method.
    ///
    /// # Examples
    ///
    /// ```
    /// use pn_proxy::AccessorConvention;
    /// use pn_proxy::info::Typed;
    ///
    /// let text = String::type_info();
    /// let flag = bool::type_info();
    ///
    /// let prefixed = AccessorConvention::Prefixed;
    /// assert_eq!(prefixed.property_stem("get_legal_name", text), Some("legal_name"));
    /// assert_eq!(prefixed.property_stem("is_archived", flag), Some("archived"));
    /// assert_eq!(prefixed.property_stem("is_archived", text), None);
    /// assert_eq!(prefixed.property_stem("legal_name", text), None);
    ///
    /// let bare = AccessorConvention::Bare;
    /// assert_eq!(bare.property_stem("legal_name", text), Some("legal_name"));
    /// assert_eq!(bare.property_stem("get_legal_name", text), Some("legal_name"));
    /// ```
    pub fn property_stem<'a>(&self, method: &'a str, returns: &TypeInfo) -> Option<&'a str> {
        let boolean = returns
            .as_terminal()
            .is_ok_and(|terminal| terminal.is_boolean());

        let stem = strip_accessor_prefix(method, "get")
            .or_else(|| boolean.then(|| strip_accessor_prefix(method, "is")).flatten());

        match self {
            Self::Prefixed => stem,
            Self::Bare => Some(stem.unwrap_or(method)).filter(|stem| !stem.is_empty()),
        }
    }
}

// `get_name` -> `name`, `getName` -> `Name`.
fn strip_accessor_prefix<'a>(method: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = method.strip_prefix(prefix)?;
    let stem = match rest.strip_prefix('_') {
        Some(stem) => stem,
        None if rest.starts_with(|c: char| c.is_ascii_uppercase()) => rest,
        None => return None,
    };
    (!stem.is_empty()).then_some(stem)
}

// -----------------------------------------------------------------------------
// NameStyle

/// How a property stem is spelled in the recorded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameStyle {
    /// `legal_name` -> `legalName`, `LegalName` -> `legalName`.
    #[default]
    LowerCamel,
    /// `legal_name` -> `legal_name`, `LegalName` -> `legal_name`.
    Snake,
}

impl NameStyle {
    /// Spells `stem` in this style.
    ///
    /// ```
    /// use pn_proxy::NameStyle;
    ///
    /// assert_eq!(NameStyle::LowerCamel.apply("legal_name"), "legalName");
    /// assert_eq!(NameStyle::LowerCamel.apply("LegalName"), "legalName");
    /// assert_eq!(NameStyle::Snake.apply("CreationDay"), "creation_day");
    /// ```
    pub fn apply(&self, stem: &str) -> String {
        match self {
            Self::LowerCamel => lower_camel(stem),
            Self::Snake => snake(stem),
        }
    }
}

fn lower_camel(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    for (index, word) in stem.split('_').filter(|w| !w.is_empty()).enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                out.push(first.to_ascii_lowercase());
            } else {
                out.push(first.to_ascii_uppercase());
            }
            out.extend(chars);
        }
    }
    out
}

fn snake(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len() + 4);
    for c in stem.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// -----------------------------------------------------------------------------
// ProxyConfig

/// Settings of a [`ProxyRegistry`](crate::ProxyRegistry).
///
/// # Examples
///
/// ```
/// use pn_proxy::{AccessorConvention, NameStyle, ProxyConfig};
///
/// let config = ProxyConfig::new()
///     .with_naming(NameStyle::Snake)
///     .with_max_stand_ins(64);
///
/// assert_eq!(config.convention(), AccessorConvention::Prefixed);
/// assert_eq!(config.max_stand_ins(), Some(64));
/// assert!(config.cache_names());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyConfig {
    convention: AccessorConvention,
    naming: NameStyle,
    max_stand_ins: Option<usize>,
    cache_names: bool,
}

impl Default for ProxyConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyConfig {
    /// Prefixed accessors, lower camel names, no stand-in limit, and the
    /// name cache enabled.
    #[inline]
    pub const fn new() -> Self {
        Self {
            convention: AccessorConvention::Prefixed,
            naming: NameStyle::LowerCamel,
            max_stand_ins: None,
            cache_names: true,
        }
    }

    #[inline]
    pub const fn with_convention(mut self, convention: AccessorConvention) -> Self {
        self.convention = convention;
        self
    }

    #[inline]
    pub const fn with_naming(mut self, naming: NameStyle) -> Self {
        self.naming = naming;
        self
    }

    /// Caps the number of stand-in instances the registry creates.
    ///
    /// Once reached, building another one fails with
    /// [`ConstructionError::PoolExhausted`](crate::ConstructionError::PoolExhausted).
    #[inline]
    pub const fn with_max_stand_ins(mut self, limit: usize) -> Self {
        self.max_stand_ins = Some(limit);
        self
    }

    /// Enables or disables the per-accessor cache of `name_of`.
    #[inline]
    pub const fn with_name_cache(mut self, enabled: bool) -> Self {
        self.cache_names = enabled;
        self
    }

    #[inline]
    pub const fn convention(&self) -> AccessorConvention {
        self.convention
    }

    #[inline]
    pub const fn naming(&self) -> NameStyle {
        self.naming
    }

    #[inline]
    pub const fn max_stand_ins(&self) -> Option<usize> {
        self.max_stand_ins
    }

    #[inline]
    pub const fn cache_names(&self) -> bool {
        self.cache_names
    }
}
