//! Benchmark configuration.

use std::str::FromStr;

/// Benchmark configuration (from CLI or defaults).
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of simulated frames.
    pub frames: u32,
    /// Shapes per grid axis; the scene holds `grid_size^2` shapes.
    pub grid_size: u32,
    /// Distance between neighbouring grid cells.
    pub spacing: f32,
    /// Length of every capsule's segment.
    pub capsule_length: f32,
    /// Radius of every sphere and capsule.
    pub radius: f32,
    /// Run the collision query pass on the rayon pool.
    pub parallel: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            grid_size: 24,
            spacing: 1.5,
            capsule_length: 2.0,
            radius: 0.5,
            parallel: true,
        }
    }
}

impl BenchmarkConfig {
    /// Parse benchmark parameters from command line arguments.
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut config = Self::default();
        let args: Vec<String> = args.into_iter().collect();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--frames" => {
                    if let Some(v) = parse_value(&args, i) {
                        config.frames = v;
                        i += 1;
                    }
                }
                "--grid" => {
                    if let Some(v) = parse_value(&args, i) {
                        config.grid_size = v;
                        i += 1;
                    }
                }
                "--spacing" => {
                    if let Some(v) = parse_value(&args, i) {
                        config.spacing = v;
                        i += 1;
                    }
                }
                "--length" => {
                    if let Some(v) = parse_value(&args, i) {
                        config.capsule_length = v;
                        i += 1;
                    }
                }
                "--radius" => {
                    if let Some(v) = parse_value(&args, i) {
                        config.radius = v;
                        i += 1;
                    }
                }
                "--serial" => config.parallel = false,
                _ => {}
            }
            i += 1;
        }

        config
    }
}

/// Parse the argument following the flag at `flag_index`.
fn parse_value<T: FromStr>(args: &[String], flag_index: usize) -> Option<T> {
    args.get(flag_index + 1).and_then(|v| v.parse().ok())
}
