//! Tunables for every page feature. Defaults carry the production values.

/// Hero particle mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig {
    /// One particle per this many square pixels of surface.
    pub area_per_particle: u64,
    /// Pairs closer than this get a connecting line.
    pub link_distance: f64,
    /// Opacity of a link between coincident particles.
    pub link_alpha: f64,
    /// Particle speed is drawn from [-max_speed, max_speed) per axis.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000,
            link_distance: 150.0,
            link_alpha: 0.5,
            max_speed: 0.15,
            min_radius: 1.0,
            max_radius: 3.0,
        }
    }
}

/// Platform orbit pulse.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub orbiters: usize,
    /// Added to the time accumulator once per frame.
    pub time_step: f64,
    /// Orbit radius as a fraction of the smaller surface side.
    pub radius_ratio: f64,
    pub orbiter_radius: f64,
    pub hub_radius: f64,
    /// Pulse ring radius swings by this fraction of the orbit radius.
    pub pulse_swing: f64,
    pub pulse_alpha: f64,
    pub pulse_alpha_swing: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            orbiters: 3,
            time_step: 0.01,
            radius_ratio: 0.3,
            orbiter_radius: 20.0,
            hub_radius: 30.0,
            pulse_swing: 0.1,
            pulse_alpha: 0.1,
            pulse_alpha_swing: 0.05,
        }
    }
}

/// Metrics wave field. Wave `i` uses `base + i * step` for each parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveFieldConfig {
    pub waves: usize,
    /// Baseline as a fraction of surface height.
    pub baseline: f64,
    pub baseline_step: f64,
    pub amplitude: f64,
    pub amplitude_step: f64,
    pub frequency: f64,
    pub frequency_step: f64,
    pub speed: f64,
    pub speed_step: f64,
    pub alpha: f64,
    pub alpha_step: f64,
    /// Horizontal distance between polyline samples.
    pub sample_step: u32,
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self {
            waves: 3,
            baseline: 0.3,
            baseline_step: 0.2,
            amplitude: 30.0,
            amplitude_step: 10.0,
            frequency: 0.005,
            frequency_step: -0.001,
            speed: 0.02,
            speed_step: 0.005,
            alpha: 0.1,
            alpha_step: -0.02,
            sample_step: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterConfig {
    pub duration_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: 2000.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    /// Simulated round trip before the form reports success.
    pub submit_delay_ms: u32,
    /// How long the success state stays before the form resets.
    pub success_hold_ms: u32,
    pub spinner_html: &'static str,
    pub success_label: &'static str,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            success_hold_ms: 3000,
            spinner_html: r#"<span class="loading-spinner"></span>"#,
            success_label: "✓ Submitted",
        }
    }
}

/// Element ids, thresholds and per-feature settings for the whole page.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub hero_canvas: &'static str,
    pub platform_canvas: &'static str,
    pub metrics_canvas: &'static str,
    pub navbar: &'static str,
    /// Scroll offset past which the navbar is marked scrolled.
    pub scroll_threshold: f64,
    /// Fraction of a reveal target that must be visible.
    pub reveal_threshold: f64,
    pub mesh: MeshConfig,
    pub orbit: OrbitConfig,
    pub waves: WaveFieldConfig,
    pub counter: CounterConfig,
    pub form: FormConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_canvas: "hero-canvas",
            platform_canvas: "platform-canvas",
            metrics_canvas: "metrics-canvas",
            navbar: "navbar",
            scroll_threshold: 50.0,
            reveal_threshold: 0.1,
            mesh: MeshConfig::default(),
            orbit: OrbitConfig::default(),
            waves: WaveFieldConfig::default(),
            counter: CounterConfig::default(),
            form: FormConfig::default(),
        }
    }
}
