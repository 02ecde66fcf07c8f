//! Chart data for the learning curve and the two weight trajectories.
//!
//! The charts are plain data, serializable with serde so any charting
//! front end can draw them. Every series is plotted against the iteration
//! index `0..N-1`. Non-finite values are kept as they are (serde_json
//! writes them as `null`).
//!
//! Drawing is left to a [`ChartRenderer`]. There is no global chart state:
//! the handle of the previous render is passed to [`rerender`], which
//! disposes it before drawing the new charts.

use serde::Serialize;

use crate::Simulation;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub point_radius: f64,
    /// `None` leaves the front end's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// `None` leaves the front end's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Dash pattern, `None` for a solid line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
}

impl LineStyle {
    /// Thin, smoothed line without point markers.
    pub fn trace() -> Self {
        LineStyle {
            point_radius: 0.0,
            border_width: Some(1.0),
            tension: Some(0.2),
            border_dash: None,
        }
    }

    /// Dashed line used for constant reference values. Only the dash and the
    /// point markers are set.
    pub fn reference() -> Self {
        LineStyle {
            point_radius: 0.0,
            border_width: None,
            tension: None,
            border_dash: Some([6, 6]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub style: LineStyle,
}

/// The shared iteration axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub min: i64,
    /// `N - 1`
    pub max: i64,
    /// `ceil(N / 5)`, giving about five ticks
    pub tick_step: usize,
    pub title: String,
}

impl Axis {
    pub fn iterations(sample_count: usize) -> Self {
        Axis {
            min: 0,
            max: sample_count as i64 - 1,
            tick_step: (sample_count + 4) / 5,
            title: "Number of Iterations".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub title: String,
    pub y_label: String,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSet {
    /// Iteration indices `0..N-1`
    pub labels: Vec<usize>,
    pub x_axis: Axis,
    pub mse: Chart,
    pub w1: Chart,
    pub w2: Chart,
}

impl ChartSet {
    pub fn from_simulation(simulation: &Simulation) -> Self {
        let sample_count = simulation.len();
        ChartSet {
            labels: (0..sample_count).collect(),
            x_axis: Axis::iterations(sample_count),
            mse: Chart {
                title: "Mean Square Error vs Number of Iterations".into(),
                y_label: "Mean Square Error".into(),
                datasets: vec![Dataset {
                    label: "Mean Square Error".into(),
                    data: simulation.mse.clone(),
                    style: LineStyle::trace(),
                }],
            },
            w1: weight_chart("w1", &simulation.w1, simulation.w_opt[0]),
            w2: weight_chart("w2", &simulation.w2, simulation.w_opt[1]),
        }
    }

    pub fn charts(&self) -> [&Chart; 3] {
        [&self.mse, &self.w1, &self.w2]
    }
}

fn weight_chart(name: &str, estimate: &[f64], optimal: f64) -> Chart {
    Chart {
        title: format!("Random Walk of {}", name),
        y_label: name.into(),
        datasets: vec![
            Dataset {
                label: format!("Estimated {}", name),
                data: estimate.to_vec(),
                style: LineStyle::trace(),
            },
            Dataset {
                label: format!("Optimal {}", name),
                data: vec![optimal; estimate.len()],
                style: LineStyle::reference(),
            },
        ],
    }
}

/// Something that draws a [`ChartSet`], e.g. a canvas in a browser.
pub trait ChartRenderer {
    /// Identifies drawn charts so they can be disposed later.
    type Handle;

    fn render(&mut self, charts: &ChartSet) -> Self::Handle;

    /// Releases everything associated with a previous render.
    fn dispose(&mut self, handle: Self::Handle);
}

/// Disposes `previous`, if any, and draws `charts`. Returns the handle
/// to pass in on the next call.
pub fn rerender<R: ChartRenderer>(
    renderer: &mut R,
    previous: Option<R::Handle>,
    charts: &ChartSet,
) -> R::Handle {
    if let Some(handle) = previous {
        renderer.dispose(handle);
    }
    renderer.render(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ar::FixedNoise;
    use crate::{simulate_with_noise, Params};

    fn reference_simulation() -> Simulation {
        let params = Params::new(5, 0.0, 0.0, 0.1);
        simulate_with_noise(&params, &mut FixedNoise::new(&[0.1, 0.2, 0.3, 0.4, 0.5]))
    }

    #[test]
    fn test_chart_set() {
        let simulation = reference_simulation();
        let charts = ChartSet::from_simulation(&simulation);

        assert_eq!(charts.labels, vec![0, 1, 2, 3, 4]);
        assert_eq!(charts.x_axis.max, 4);
        assert_eq!(charts.x_axis.tick_step, 1);
        assert_eq!(charts.mse.datasets[0].data, simulation.mse);

        assert_eq!(charts.w1.datasets[0].label, "Estimated w1");
        assert_eq!(charts.w1.datasets[0].data, simulation.w1);
        assert_eq!(charts.w1.datasets[1].label, "Optimal w1");
        assert_eq!(charts.w1.datasets[1].data, vec![simulation.w_opt[0]; 5]);
        assert_eq!(charts.w2.datasets[1].data, vec![simulation.w_opt[1]; 5]);
        assert_eq!(charts.w2.datasets[1].style.border_dash, Some([6, 6]));
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(Axis::iterations(50).tick_step, 10);
        assert_eq!(Axis::iterations(100).tick_step, 20);
        assert_eq!(Axis::iterations(101).tick_step, 21);
        assert_eq!(Axis::iterations(0).max, -1);
    }

    #[test]
    fn test_json() {
        let charts = ChartSet::from_simulation(&reference_simulation());
        let json = serde_json::to_value(&charts).unwrap();
        assert_eq!(json["xAxis"]["tickStep"], 1);
        assert_eq!(json["w1"]["datasets"][1]["borderDash"][0], 6);
        assert_eq!(json["mse"]["datasets"][0]["pointRadius"], 0.0);
        assert!(json["mse"]["datasets"][0].get("borderDash").is_none());
        assert_eq!(json["mse"]["datasets"][0]["borderWidth"], 1.0);
        assert_eq!(json["w2"]["datasets"][0]["tension"], 0.2);
    }

    #[test]
    fn test_reference_line_keeps_default_width() {
        let charts = ChartSet::from_simulation(&reference_simulation());
        let json = serde_json::to_value(&charts).unwrap();
        let optimal = &json["w2"]["datasets"][1];
        assert_eq!(optimal["label"], "Optimal w2");
        assert_eq!(optimal["pointRadius"], 0.0);
        assert_eq!(optimal["borderDash"][1], 6);
        assert!(optimal.get("borderWidth").is_none());
        assert!(optimal.get("tension").is_none());
    }

    #[test]
    fn test_non_finite_values_serialize_as_null() {
        let simulation = crate::simulate(&Params::new(1, 0.0, 0.0, 0.1));
        let charts = ChartSet::from_simulation(&simulation);
        let json = serde_json::to_value(&charts).unwrap();
        assert!(json["w1"]["datasets"][1]["data"][0].is_null());
    }

    #[derive(Default)]
    struct CountingRenderer {
        live: Vec<usize>,
        next_id: usize,
    }

    impl ChartRenderer for CountingRenderer {
        type Handle = usize;

        fn render(&mut self, charts: &ChartSet) -> usize {
            assert_eq!(charts.charts().len(), 3);
            self.next_id += 1;
            self.live.push(self.next_id);
            self.next_id
        }

        fn dispose(&mut self, handle: usize) {
            self.live.retain(|id| *id != handle);
        }
    }

    #[test]
    fn test_rerender_disposes_previous() {
        let charts = ChartSet::from_simulation(&reference_simulation());
        let mut renderer = CountingRenderer::default();

        let mut handle = rerender(&mut renderer, None, &charts);
        for _ in 0..3 {
            handle = rerender(&mut renderer, Some(handle), &charts);
        }
        assert_eq!(renderer.live, vec![handle]);
        assert_eq!(handle, 4);
    }
}
