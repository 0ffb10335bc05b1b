//! Render State
//!
//! Everything a presentation layer needs to draw the monitor, flattened into
//! one serializable value. Building a view never mutates the session.
//!
//! ## Chart Geometry
//!
//! Trend lines are laid out in a 100 × 100 box, newest point on the right:
//!
//! ```text
//! x = i / (n − 1) × 100
//! y = 100 − v / range × 100        range = max(values) × 1.2, or 1 when not positive
//! ```
//!
//! Gauges fill to `value / (gauge_max × 1.5) × 100`, clamped to `[0, 100]`.

use serde::Serialize;

use crate::buffer::HistoryWindow;
use crate::channels::SensorChannel;
use crate::constants::quality::{CHART_HEADROOM, GAUGE_HEADROOM};
use crate::history::HistoryBuffer;
use crate::profiles::{FoodProfile, ProfileKey};
use crate::scoring::{channel_status, ChannelStatus, QualityAssessment, QualityVerdict};
use crate::snapshot::Snapshot;
use crate::synthesizer::SimulationMode;
use crate::time::Timestamp;

/// Point in chart space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Horizontal position, 0 to 100
    pub x: f64,
    /// Vertical position, 0 at the top
    pub y: f64,
}

/// One trend chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    /// Charted channel
    pub channel: SensorChannel,
    /// Display label
    pub label: &'static str,
    /// Line color
    pub color: &'static str,
    /// Raw values, oldest first
    pub values: Vec<f64>,
    /// Chart coordinates, same order as `values`
    pub points: Vec<TrendPoint>,
    /// How many points came from reading cycles
    pub live_points: usize,
}

impl TrendLine {
    /// Chart for one history window
    pub fn from_window<const N: usize>(channel: &SensorChannel, window: &HistoryWindow<N>) -> Self {
        let values = window.values();
        let info = channel.info();
        Self {
            channel: channel.clone(),
            label: info.label,
            color: info.color,
            points: chart_points(&values),
            values,
            live_points: window.live_count(),
        }
    }
}

/// Lay values out in the 100 × 100 chart box
pub fn chart_points(values: &[f64]) -> Vec<TrendPoint> {
    let peak = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = peak * CHART_HEADROOM;
    let range = if range > 0.0 { range } else { 1.0 };
    let span = values.len().saturating_sub(1);

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| TrendPoint {
            x: if span == 0 { 0.0 } else { i as f64 / span as f64 * 100.0 },
            y: 100.0 - v / range * 100.0,
        })
        .collect()
}

/// Gauge fill percentage, `None` for channels without a gauge scale
pub fn gauge_percent(channel: &SensorChannel, value: f64) -> Option<f64> {
    channel
        .info()
        .gauge_max
        .map(|max| (value / (max * GAUGE_HEADROOM) * 100.0).clamp(0.0, 100.0))
}

/// One channel card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelView {
    /// Channel shown
    pub channel: SensorChannel,
    /// Display label
    pub label: &'static str,
    /// Unit suffix
    pub unit: &'static str,
    /// Accent color
    pub color: &'static str,
    /// Latest reading
    pub value: f64,
    /// Advisory status
    pub status: ChannelStatus,
    /// Gauge fill, if the channel has a gauge
    pub gauge_percent: Option<f64>,
    /// Weight this channel added to the score
    pub contribution: u32,
}

/// Complete render state of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// Active category
    pub profile: ProfileKey,
    /// Display name of the category
    pub profile_name: String,
    /// Active simulation mode
    pub mode: SimulationMode,
    /// When the shown snapshot was taken
    pub taken_at: Timestamp,
    /// One card per channel in the snapshot
    pub channels: Vec<ChannelView>,
    /// Weighted spoilage score
    pub score: u32,
    /// Verdict for the score
    pub verdict: QualityVerdict,
    /// Badge headline
    pub headline: &'static str,
    /// Badge description
    pub description: &'static str,
    /// Analysis paragraph
    pub insight: &'static str,
    /// Trend charts, in the profile's display order
    pub trends: Vec<TrendLine>,
    /// True while a reading is in flight
    pub busy: bool,
}

impl SessionView {
    pub(crate) fn build<const N: usize>(
        profile: &FoodProfile,
        mode: SimulationMode,
        snapshot: &Snapshot,
        assessment: &QualityAssessment,
        history: &HistoryBuffer<N>,
        busy: bool,
    ) -> Self {
        let channels = snapshot
            .readings()
            .iter()
            .map(|(channel, &value)| {
                let info = channel.info();
                ChannelView {
                    channel: channel.clone(),
                    label: info.label,
                    unit: info.unit,
                    color: info.color,
                    value,
                    status: channel_status(channel, value, profile),
                    gauge_percent: gauge_percent(channel, value),
                    contribution: assessment.contributions().get(channel).copied().unwrap_or(0),
                }
            })
            .collect();

        let trends = profile
            .trend_channels()
            .iter()
            .filter_map(|channel| {
                history
                    .window(channel)
                    .map(|window| TrendLine::from_window(channel, window))
            })
            .collect();

        let verdict = assessment.verdict();
        Self {
            profile: profile.key(),
            profile_name: profile.name().to_string(),
            mode,
            taken_at: snapshot.taken_at(),
            channels,
            score: assessment.score(),
            verdict,
            headline: verdict.headline(),
            description: verdict.description(),
            insight: verdict.insight(),
            trends,
            busy,
        }
    }

    /// Card for one channel
    pub fn channel(&self, channel: &SensorChannel) -> Option<&ChannelView> {
        self.channels.iter().find(|c| &c.channel == channel)
    }

    /// Trend chart for one channel
    pub fn trend(&self, channel: &SensorChannel) -> Option<&TrendLine> {
        self.trends.iter().find(|t| &t.channel == channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileRegistry;
    use crate::scoring::score;

    #[test]
    fn chart_spans_the_box() {
        let points = chart_points(&[0.0, 5.0, 10.0]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 50.0);
        assert_eq!(points[2].x, 100.0);
        assert_eq!(points[0].y, 100.0);
        // 10 / 12 of the height
        assert!((points[2].y - (100.0 - 10.0 / 12.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn flat_zero_chart_uses_unit_range() {
        let points = chart_points(&[0.0; 4]);
        assert!(points.iter().all(|p| p.y == 100.0));
    }

    #[test]
    fn single_point_chart_sits_on_the_left() {
        let points = chart_points(&[3.0]);
        assert_eq!(points[0].x, 0.0);
    }

    #[test]
    fn gauge_is_clamped() {
        // temperature gauge full scale = 30 × 1.5 = 45
        assert_eq!(gauge_percent(&SensorChannel::Temperature, 0.0), Some(0.0));
        assert_eq!(gauge_percent(&SensorChannel::Temperature, 90.0), Some(100.0));
        assert_eq!(gauge_percent(&SensorChannel::Humidity, -5.0), Some(0.0));
        assert_eq!(gauge_percent(&SensorChannel::Humidity, 75.0), Some(50.0));
        assert_eq!(gauge_percent(&SensorChannel::Custom("co2".into()), 5.0), None);
    }

    #[test]
    fn view_covers_snapshot_and_trend_channels() {
        let registry = ProfileRegistry::builtin().unwrap();
        let fruit = registry.get("fruit").unwrap();
        let snapshot = Snapshot::baseline(&fruit, 42);
        let assessment = score(&snapshot, &fruit);
        let history: HistoryBuffer = HistoryBuffer::flat(&fruit);

        let view = SessionView::build(
            &fruit,
            SimulationMode::Normal,
            &snapshot,
            &assessment,
            &history,
            false,
        );

        assert_eq!(view.profile, ProfileKey::Fruit);
        assert_eq!(view.taken_at, 42);
        assert_eq!(view.channels.len(), fruit.baseline().len());
        assert_eq!(view.verdict, QualityVerdict::Safe);
        assert_eq!(view.headline, "SAFE TO EAT");

        let trend_channels: Vec<_> = view.trends.iter().map(|t| t.channel.clone()).collect();
        assert_eq!(trend_channels, fruit.trend_channels());
        assert!(view.trends.iter().all(|t| t.values.len() == 10 && t.live_points == 0));

        let ethylene = view.channel(&SensorChannel::Ethylene).unwrap();
        assert_eq!(ethylene.status, ChannelStatus::Good);
        assert_eq!(ethylene.unit, "ppm");
    }

    #[test]
    fn view_serializes_with_channel_keys() {
        let registry = ProfileRegistry::builtin().unwrap();
        let milk = registry.get("milk").unwrap();
        let snapshot = Snapshot::baseline(&milk, 0);
        let assessment = score(&snapshot, &milk);
        let history: HistoryBuffer = HistoryBuffer::flat(&milk);
        let view = SessionView::build(
            &milk,
            SimulationMode::Spoilage,
            &snapshot,
            &assessment,
            &history,
            true,
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["profile"], "pasteurized-milk");
        assert_eq!(json["mode"], "spoilage");
        assert_eq!(json["verdict"], "safe");
        assert_eq!(json["busy"], true);
        assert_eq!(json["channels"][0]["channel"], "temp");
    }
}
