//! The XML documents sent as request bodies.

use std::fmt;
use std::io::{self, Write};

use quick_xml::Writer;

use crate::error::XmlError;
use crate::serialize::{S3Serialize, write_text_element};

/// Body of a CreateBucket request.
///
/// ```xml
/// <CreateBucketConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
///   <LocationConstraint>fr-par</LocationConstraint>
/// </CreateBucketConfiguration>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBucketConfiguration {
    location_constraint: String,
}

impl CreateBucketConfiguration {
    /// Location constraint used when none is given.
    pub const DEFAULT_LOCATION: &str = "fr-par";

    /// Create a configuration for the given location.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::InvalidValue`] for an empty location.
    pub fn new(location_constraint: impl Into<String>) -> Result<Self, XmlError> {
        let location_constraint = location_constraint.into();
        if location_constraint.trim().is_empty() {
            return Err(XmlError::InvalidValue {
                field: "LocationConstraint",
                reason: "location constraint is empty".to_owned(),
            });
        }
        Ok(Self {
            location_constraint,
        })
    }

    /// The location constraint.
    #[must_use]
    pub fn location_constraint(&self) -> &str {
        &self.location_constraint
    }
}

impl Default for CreateBucketConfiguration {
    fn default() -> Self {
        Self {
            location_constraint: Self::DEFAULT_LOCATION.to_owned(),
        }
    }
}

impl S3Serialize for CreateBucketConfiguration {
    const ROOT: &'static str = "CreateBucketConfiguration";

    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "LocationConstraint", &self.location_constraint)
    }
}

/// Retrieval tier of a restore from an archive storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreTier {
    /// Fastest, most expensive.
    Expedited,
    /// Provider default.
    Standard,
    /// Slowest, cheapest.
    Bulk,
}

impl RestoreTier {
    /// Wire name of the tier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expedited => "Expedited",
            Self::Standard => "Standard",
            Self::Bulk => "Bulk",
        }
    }
}

impl fmt::Display for RestoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RestoreTier {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "expedited" => Ok(Self::Expedited),
            "standard" => Ok(Self::Standard),
            "bulk" => Ok(Self::Bulk),
            other => Err(XmlError::InvalidValue {
                field: "Tier",
                reason: format!("unknown restore tier: {other}"),
            }),
        }
    }
}

/// Body of a RestoreObject request.
///
/// ```xml
/// <RestoreRequest xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
///   <Days>250</Days>
/// </RestoreRequest>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreRequest {
    days: u32,
    tier: Option<RestoreTier>,
}

impl RestoreRequest {
    /// Number of days a restored copy stays available when none is given.
    pub const DEFAULT_DAYS: u32 = 250;

    /// Create a restore request keeping the copy for `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::InvalidValue`] when `days` is zero.
    pub fn new(days: u32) -> Result<Self, XmlError> {
        if days == 0 {
            return Err(XmlError::InvalidValue {
                field: "Days",
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(Self { days, tier: None })
    }

    /// Request a specific retrieval tier.
    #[must_use]
    pub fn with_tier(mut self, tier: RestoreTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Days the restored copy stays available.
    #[must_use]
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Requested retrieval tier, if any.
    #[must_use]
    pub fn tier(&self) -> Option<RestoreTier> {
        self.tier
    }
}

impl Default for RestoreRequest {
    fn default() -> Self {
        Self {
            days: Self::DEFAULT_DAYS,
            tier: None,
        }
    }
}

impl S3Serialize for RestoreRequest {
    const ROOT: &'static str = "RestoreRequest";

    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Days", &self.days.to_string())?;
        if let Some(tier) = self.tier {
            writer
                .create_element("GlacierJobParameters")
                .write_inner_content(|w| write_text_element(w, "Tier", tier.as_str()))?;
        }
        Ok(())
    }
}
