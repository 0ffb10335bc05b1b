//! Sensor Channel Identifiers and Display Metadata
//!
//! Channels are open-ended: a profile may declare any subset of the known
//! channels and may add its own. Readings are therefore keyed by
//! [`SensorChannel`] in a map rather than stored in fixed fields.
//!
//! Known channels serialize to the short names used in profile catalogs:
//!
//! ```text
//! temp       Temperature               °C
//! humidity   Humidity                  %
//! ammonia    Ammonia (NH3)             ppm   bad indicator
//! h2s        Hydrogen Sulfide (H2S)    ppm   bad indicator
//! voc        Total VOCs                ppb   bad indicator
//! ethyl      Ethylene                  ppm   bad indicator
//! alcohol    Alcohol/Ethanol           ppm   bad indicator
//! turbidity  Turbidity                 NTU   bad indicator
//! ```
//!
//! Any other name becomes [`SensorChannel::Custom`].

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sensor channel identifier
///
/// Ordering follows declaration order, with custom channels sorted by name
/// after all known channels. Maps keyed by channel iterate in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensorChannel {
    /// Product or headspace temperature
    Temperature,
    /// Relative humidity
    Humidity,
    /// Ammonia, from protein breakdown
    Ammonia,
    /// Hydrogen sulfide, the rotten-egg marker
    HydrogenSulfide,
    /// Total volatile organic compounds
    VolatileOrganics,
    /// Ethylene, the ripening hormone
    Ethylene,
    /// Alcohol from fermentation
    Alcohol,
    /// Optical turbidity of liquids
    Turbidity,
    /// Channel outside the known set, keyed by name
    Custom(String),
}

/// Display metadata for a channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelInfo {
    /// Human-readable label
    pub label: &'static str,
    /// Unit of measurement
    pub unit: &'static str,
    /// Chart/accent color as a hex string
    pub color: &'static str,
    /// Full-scale reference for gauges (None for custom channels)
    pub gauge_max: Option<f64>,
}

const CUSTOM_INFO: ChannelInfo = ChannelInfo {
    label: "Custom Sensor",
    unit: "",
    color: "#94a3b8",
    gauge_max: None,
};

impl SensorChannel {
    /// Every known channel, in canonical order
    pub const KNOWN: [SensorChannel; 8] = [
        SensorChannel::Temperature,
        SensorChannel::Humidity,
        SensorChannel::Ammonia,
        SensorChannel::HydrogenSulfide,
        SensorChannel::VolatileOrganics,
        SensorChannel::Ethylene,
        SensorChannel::Alcohol,
        SensorChannel::Turbidity,
    ];

    /// Catalog key for this channel
    pub fn key(&self) -> &str {
        match self {
            SensorChannel::Temperature => "temp",
            SensorChannel::Humidity => "humidity",
            SensorChannel::Ammonia => "ammonia",
            SensorChannel::HydrogenSulfide => "h2s",
            SensorChannel::VolatileOrganics => "voc",
            SensorChannel::Ethylene => "ethyl",
            SensorChannel::Alcohol => "alcohol",
            SensorChannel::Turbidity => "turbidity",
            SensorChannel::Custom(name) => name,
        }
    }

    /// Rising values on this channel signal decomposition
    pub fn is_bad_indicator(&self) -> bool {
        matches!(
            self,
            SensorChannel::Ammonia
                | SensorChannel::HydrogenSulfide
                | SensorChannel::VolatileOrganics
                | SensorChannel::Ethylene
                | SensorChannel::Alcohol
                | SensorChannel::Turbidity
        )
    }

    /// True for the temperature channel
    pub fn is_temperature(&self) -> bool {
        matches!(self, SensorChannel::Temperature)
    }

    /// Display metadata
    pub fn info(&self) -> ChannelInfo {
        match self {
            SensorChannel::Temperature => ChannelInfo {
                label: "Temperature",
                unit: "°C",
                color: "#fbbf24",
                gauge_max: Some(30.0),
            },
            SensorChannel::Humidity => ChannelInfo {
                label: "Humidity",
                unit: "%",
                color: "#38bdf8",
                gauge_max: Some(100.0),
            },
            SensorChannel::Ammonia => ChannelInfo {
                label: "Ammonia (NH3)",
                unit: "ppm",
                color: "#f43f5e",
                gauge_max: Some(50.0),
            },
            SensorChannel::HydrogenSulfide => ChannelInfo {
                label: "Hydrogen Sulfide (H2S)",
                unit: "ppm",
                color: "#a855f7",
                gauge_max: Some(10.0),
            },
            SensorChannel::VolatileOrganics => ChannelInfo {
                label: "Total VOCs",
                unit: "ppb",
                color: "#3b82f6",
                gauge_max: Some(500.0),
            },
            SensorChannel::Ethylene => ChannelInfo {
                label: "Ethylene",
                unit: "ppm",
                color: "#84cc16",
                gauge_max: Some(200.0),
            },
            SensorChannel::Alcohol => ChannelInfo {
                label: "Alcohol/Ethanol",
                unit: "ppm",
                color: "#f97316",
                gauge_max: Some(100.0),
            },
            SensorChannel::Turbidity => ChannelInfo {
                label: "Turbidity",
                unit: "NTU",
                color: "#14b8a6",
                gauge_max: Some(100.0),
            },
            SensorChannel::Custom(_) => CUSTOM_INFO,
        }
    }
}

impl From<&str> for SensorChannel {
    fn from(key: &str) -> Self {
        match key {
            "temp" => SensorChannel::Temperature,
            "humidity" => SensorChannel::Humidity,
            "ammonia" => SensorChannel::Ammonia,
            "h2s" => SensorChannel::HydrogenSulfide,
            "voc" => SensorChannel::VolatileOrganics,
            "ethyl" => SensorChannel::Ethylene,
            "alcohol" => SensorChannel::Alcohol,
            "turbidity" => SensorChannel::Turbidity,
            other => SensorChannel::Custom(other.to_string()),
        }
    }
}

impl From<String> for SensorChannel {
    fn from(key: String) -> Self {
        SensorChannel::from(key.as_str())
    }
}

impl From<SensorChannel> for String {
    fn from(channel: SensorChannel) -> Self {
        match channel {
            SensorChannel::Custom(name) => name,
            known => known.key().to_string(),
        }
    }
}

impl FromStr for SensorChannel {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SensorChannel::from(s))
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
