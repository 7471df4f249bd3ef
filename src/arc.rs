//! Polar projection and arc path descriptors for drawing chart sectors.

use crate::chart::ChartData;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc_flag: u8,
        sweep_flag: u8,
        to: Point,
    },
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            Self::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc_flag,
                sweep_flag,
                to,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                rx, ry, x_axis_rotation, large_arc_flag, sweep_flag, to.x, to.y
            ),
        }
    }
}

/// An ordered list of drawing commands. `Display` renders it as an SVG `d` attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArcPath {
    pub commands: Vec<PathCommand>,
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPath {
    pub subscription_id: String,
    pub path: ArcPath,
}

/// Projects a point on a circle. Angle `0` points up (12 o'clock) and grows clockwise.
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_degrees: f64) -> Point {
    let theta = (angle_degrees - 90.0).to_radians();
    Point {
        x: center_x + radius * theta.cos(),
        y: center_y + radius * theta.sin(),
    }
}

/// Describes the arc between two angles on a circle centered at `(x, y)`.
///
/// The path starts at `end_angle` and arcs back to `start_angle` with a
/// sweep flag of `0`; renderers rely on that direction.
pub fn describe_arc(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    let start = polar_to_cartesian(x, y, radius, end_angle);
    let end = polar_to_cartesian(x, y, radius, start_angle);

    let large_arc_flag = if end_angle - start_angle > 180.0 { 1 } else { 0 };

    ArcPath {
        commands: vec![
            PathCommand::MoveTo(start),
            PathCommand::Arc {
                rx: radius,
                ry: radius,
                x_axis_rotation: 0.0,
                large_arc_flag,
                sweep_flag: 0,
                to: end,
            },
        ],
    }
}

/// One arc path per chart sector, in sector order.
pub fn sector_paths(chart: &ChartData, center_x: f64, center_y: f64, radius: f64) -> Vec<SectorPath> {
    chart
        .sectors
        .iter()
        .map(|sector| SectorPath {
            subscription_id: sector.subscription.id.clone(),
            path: describe_arc(
                center_x,
                center_y,
                radius,
                sector.start_angle,
                sector.end_angle,
            ),
        })
        .collect()
}
