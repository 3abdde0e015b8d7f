use crate::constants::{
    ANALYTICS, CONTACT_FORM, CUSTOM_DOMAIN, GALLERY, KNOWN_FEATURES, ONLINE_BOOKING,
    PRIORITY_SUPPORT, SEO_TOOLS, TESTIMONIALS,
};
use bitflags::bitflags;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Represents a set of features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const CONTACT_FORM = 1 << 0;
        const GALLERY = 1 << 1;
        const TESTIMONIALS = 1 << 2;
        const SEO_TOOLS = 1 << 3;
        const CUSTOM_DOMAIN = 1 << 4;
        const ONLINE_BOOKING = 1 << 5;
        const ANALYTICS = 1 << 6;
        const PRIORITY_SUPPORT = 1 << 7;

        const ALL = Self::CONTACT_FORM.bits()
            | Self::GALLERY.bits()
            | Self::TESTIMONIALS.bits()
            | Self::SEO_TOOLS.bits()
            | Self::CUSTOM_DOMAIN.bits()
            | Self::ONLINE_BOOKING.bits()
            | Self::ANALYTICS.bits()
            | Self::PRIORITY_SUPPORT.bits();
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s {
            CONTACT_FORM => Self::CONTACT_FORM,
            GALLERY => Self::GALLERY,
            TESTIMONIALS => Self::TESTIMONIALS,
            SEO_TOOLS => Self::SEO_TOOLS,
            CUSTOM_DOMAIN => Self::CUSTOM_DOMAIN,
            ONLINE_BOOKING => Self::ONLINE_BOOKING,
            ANALYTICS => Self::ANALYTICS,
            PRIORITY_SUPPORT => Self::PRIORITY_SUPPORT,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// Commercial package level of a site instance.
///
/// Set by configuration, never computed. Drives the feature gating table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    #[default]
    Starter,
    Professional,
    Premium,
}

impl PackageTier {
    pub const ALL: [Self; 3] = [Self::Starter, Self::Professional, Self::Premium];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Premium => "premium",
        }
    }

    /// The static gating table: Starter ⊂ Professional ⊂ Premium.
    #[must_use]
    pub const fn features(self) -> FeatureSet {
        match self {
            Self::Starter => FeatureSet::CONTACT_FORM.union(FeatureSet::GALLERY),
            Self::Professional => Self::Starter
                .features()
                .union(FeatureSet::TESTIMONIALS)
                .union(FeatureSet::SEO_TOOLS)
                .union(FeatureSet::CUSTOM_DOMAIN),
            Self::Premium => FeatureSet::ALL,
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Self::Starter),
            "professional" => Ok(Self::Professional),
            "premium" => Ok(Self::Premium),
            _ => Err(UnknownTier(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognized tier name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown package tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

/// The resolved capability set of a tier.
///
/// Serializes to a **total** map: every known feature key is present with an
/// explicit boolean, so consumers never have to distinguish "absent" from
/// "off".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConfig {
    pub tier: PackageTier,
    pub flags: FeatureSet,
}

impl FeatureConfig {
    #[must_use]
    pub fn enabled(&self, feature: &str) -> bool {
        let flag = FeatureSet::from(feature);
        !flag.is_empty() && self.flags.contains(flag)
    }

    /// Iterates every known feature key with its resolved boolean.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        KNOWN_FEATURES.iter().map(|name| (*name, self.enabled(name)))
    }
}

impl Serialize for FeatureConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(KNOWN_FEATURES.len()))?;
        for (name, enabled) in self.iter() {
            map.serialize_entry(name, &enabled)?;
        }
        map.end()
    }
}

/// Returns the complete flag set for a tier; every known feature key resolves.
#[must_use]
pub const fn feature_config(tier: PackageTier) -> FeatureConfig {
    FeatureConfig { tier, flags: tier.features() }
}

/// Looks up one feature for a tier. Unrecognized names resolve to `false`
/// rather than failing, to keep call sites simple.
#[must_use]
pub fn has_feature(tier: PackageTier, feature: &str) -> bool {
    feature_config(tier).enabled(feature)
}
