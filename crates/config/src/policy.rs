use std::fmt;
use std::str::FromStr;

/// How the build treats a navigation or content reference that does not
/// resolve to a document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCheckPolicy {
    /// Broken references are tolerated silently.
    Ignore,
    /// Broken references are reported, the build continues.
    Warn,
    /// Any broken reference aborts the build.
    #[default]
    Throw,
}

impl LinkCheckPolicy {
    pub const VARIANTS: [&'static str; 3] = ["ignore", "warn", "throw"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }

    pub fn is_fatal(self) -> bool {
        self == Self::Throw
    }
}

impl fmt::Display for LinkCheckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkCheckPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "throw" => Ok(Self::Throw),
            _ => Err(format!(
                "unknown link-check policy `{s}`, expected one of: {}",
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert_eq!(LinkCheckPolicy::default(), LinkCheckPolicy::Throw);
        assert!(LinkCheckPolicy::default().is_fatal());
    }

    #[test]
    fn parse_known() {
        for name in LinkCheckPolicy::VARIANTS {
            let policy: LinkCheckPolicy = name.parse().unwrap();
            assert_eq!(policy.to_string(), name);
        }
    }

    #[test]
    fn parse_unknown() {
        let err = "fail".parse::<LinkCheckPolicy>().unwrap_err();
        assert!(err.contains("ignore, warn, throw"));
    }

    #[test]
    fn deserialize_lowercase() {
        let policy: LinkCheckPolicy = serde_yaml::from_str("warn").unwrap();
        assert_eq!(policy, LinkCheckPolicy::Warn);
    }
}
