//! Scene configuration: simulation settings plus emitter/effect lists, loaded from TOML

use crate::effect::{
    Effect, EffectKind, ForceFalloff, DEFAULT_FALLOFF, DEFAULT_FORCE, DEFAULT_MIN_DISTANCE,
};
use crate::emitter::{Emitter, EmitterKind, DEFAULT_DIRECTION, DEFAULT_WIDTH};
use crate::scene::ParticleScene;
use ember_core::{EmberError, Result};
use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Age past which a particle is removed, in seconds
pub const DEFAULT_MAX_LIFETIME: f32 = 4.0;

/// Tunables for the frame step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub max_lifetime: f32,
    pub falloff: f32,
    pub min_distance: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            max_lifetime: DEFAULT_MAX_LIFETIME,
            falloff: DEFAULT_FALLOFF,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl SimulationSettings {
    pub fn force_falloff(&self) -> ForceFalloff {
        ForceFalloff {
            k: self.falloff,
            min_distance: self.min_distance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("simulation.max_lifetime", self.max_lifetime)?;
        positive("simulation.falloff", self.falloff)?;
        positive("simulation.min_distance", self.min_distance)?;
        Ok(())
    }
}

/// `[simulation]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_lifetime: f32,
    pub falloff: f32,
    pub min_distance: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::from_settings(SimulationSettings::default(), None)
    }
}

impl SimulationConfig {
    pub fn from_settings(settings: SimulationSettings, seed: Option<u64>) -> Self {
        Self {
            max_lifetime: settings.max_lifetime,
            falloff: settings.falloff,
            min_distance: settings.min_distance,
            seed,
        }
    }

    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            max_lifetime: self.max_lifetime,
            falloff: self.falloff,
            min_distance: self.min_distance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmitterType {
    #[default]
    Uniform,
    Directional,
    Spinner,
}

/// One `[[emitters]]` entry. `direction`/`width` only matter for directional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub kind: EmitterType,
    pub position: [f32; 2],
    pub direction: f32,
    pub width: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Default for EmitterConfig {
    fn default() -> Self {
        let base = Emitter::uniform();
        Self {
            kind: EmitterType::Uniform,
            position: base.position.to_array(),
            direction: DEFAULT_DIRECTION,
            width: DEFAULT_WIDTH,
            radius: base.radius,
            color: base.color.to_array(),
        }
    }
}

impl EmitterConfig {
    pub fn validate(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("emitters[{index}].{name}");
        finite_all(&field("position"), &self.position)?;
        finite(&field("direction"), self.direction)?;
        finite(&field("width"), self.width)?;
        non_negative(&field("radius"), self.radius)?;
        unit_color(&field("color"), &self.color)?;
        Ok(())
    }

    pub fn to_emitter(&self) -> Emitter {
        let kind = match self.kind {
            EmitterType::Uniform => EmitterKind::Uniform,
            EmitterType::Directional => EmitterKind::Directional {
                direction: self.direction,
                width: self.width,
            },
            EmitterType::Spinner => EmitterKind::Spinner,
        };
        Emitter {
            position: Vec2::from_array(self.position),
            radius: self.radius,
            color: Vec4::from_array(self.color),
            kind,
        }
    }
}

impl From<&Emitter> for EmitterConfig {
    fn from(emitter: &Emitter) -> Self {
        let (kind, direction, width) = match emitter.kind {
            EmitterKind::Uniform => (EmitterType::Uniform, DEFAULT_DIRECTION, DEFAULT_WIDTH),
            EmitterKind::Directional { direction, width } => {
                (EmitterType::Directional, direction, width)
            }
            EmitterKind::Spinner => (EmitterType::Spinner, DEFAULT_DIRECTION, DEFAULT_WIDTH),
        };
        Self {
            kind,
            position: emitter.position.to_array(),
            direction,
            width,
            radius: emitter.radius,
            color: emitter.color.to_array(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    #[default]
    GravityWell,
    Wind,
}

/// One `[[effects]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub kind: EffectType,
    pub position: [f32; 2],
    pub force: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Default for EffectConfig {
    fn default() -> Self {
        let base = Effect::gravity_well();
        Self {
            kind: EffectType::GravityWell,
            position: base.position.to_array(),
            force: DEFAULT_FORCE,
            radius: base.radius,
            color: base.color.to_array(),
        }
    }
}

impl EffectConfig {
    pub fn validate(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("effects[{index}].{name}");
        finite_all(&field("position"), &self.position)?;
        finite(&field("force"), self.force)?;
        non_negative(&field("radius"), self.radius)?;
        unit_color(&field("color"), &self.color)?;
        Ok(())
    }

    pub fn to_effect(&self) -> Effect {
        let kind = match self.kind {
            EffectType::GravityWell => EffectKind::GravityWell,
            EffectType::Wind => EffectKind::Wind,
        };
        Effect {
            position: Vec2::from_array(self.position),
            radius: self.radius,
            color: Vec4::from_array(self.color),
            force: self.force,
            kind,
        }
    }
}

impl From<&Effect> for EffectConfig {
    fn from(effect: &Effect) -> Self {
        Self {
            kind: match effect.kind {
                EffectKind::GravityWell => EffectType::GravityWell,
                EffectKind::Wind => EffectType::Wind,
            },
            position: effect.position.to_array(),
            force: effect.force,
            radius: effect.radius,
            color: effect.color.to_array(),
        }
    }
}

/// A whole scene file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub simulation: SimulationConfig,
    pub emitters: Vec<EmitterConfig>,
    pub effects: Vec<EffectConfig>,
}

impl SceneConfig {
    /// Parse and validate a scene from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            emitters = config.emitters.len(),
            effects = config.effects.len(),
            "loaded scene config"
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the scene to `path`, refusing to replace an existing file
    pub fn save_new(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(EmberError::Validation(format!(
                "refusing to overwrite existing file: {}",
                path.display()
            )));
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.settings().validate()?;
        for (i, emitter) in self.emitters.iter().enumerate() {
            emitter.validate(i)?;
        }
        for (i, effect) in self.effects.iter().enumerate() {
            effect.validate(i)?;
        }
        Ok(())
    }

    /// Instantiate the scene. `seed_override` wins over the file's seed;
    /// with neither, the scene is seeded from OS entropy.
    pub fn build_scene(&self, seed_override: Option<u64>) -> ParticleScene {
        let settings = self.simulation.settings();
        let mut scene = match seed_override.or(self.simulation.seed) {
            Some(seed) => ParticleScene::with_seed(settings, seed),
            None => ParticleScene::new(settings),
        };
        for emitter in &self.emitters {
            scene.add_emitter(emitter.to_emitter());
        }
        for effect in &self.effects {
            scene.add_effect(effect.to_effect());
        }
        scene
    }

    /// Snapshot a scene's editable state
    pub fn from_scene(scene: &ParticleScene) -> Self {
        Self {
            simulation: SimulationConfig::from_settings(*scene.settings(), None),
            emitters: scene.emitters().iter().map(EmitterConfig::from).collect(),
            effects: scene.effects().iter().map(EffectConfig::from).collect(),
        }
    }

    /// Starter scene written by `ember init`
    pub fn template() -> Self {
        Self {
            simulation: SimulationConfig::from_settings(SimulationSettings::default(), Some(7)),
            emitters: vec![
                EmitterConfig {
                    kind: EmitterType::Directional,
                    position: [-0.5, -0.5],
                    direction: 0.8,
                    width: 0.4,
                    ..Default::default()
                },
                EmitterConfig {
                    kind: EmitterType::Uniform,
                    position: [0.5, 0.5],
                    ..Default::default()
                },
            ],
            effects: vec![
                EffectConfig::default(),
                EffectConfig {
                    kind: EffectType::Wind,
                    position: [-0.4, 0.6],
                    ..Default::default()
                },
            ],
        }
    }
}

// ── Validation helpers ──

fn finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EmberError::Validation(format!("{field} must be finite, got {value}")))
    }
}

fn finite_all(field: &str, values: &[f32]) -> Result<()> {
    values.iter().try_for_each(|v| finite(field, *v))
}

fn positive(field: &str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, f32::MIN_POSITIVE, f32::MAX, value))
    }
}

fn non_negative(field: &str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, 0.0, f32::MAX, value))
    }
}

fn unit_color(field: &str, color: &[f32; 4]) -> Result<()> {
    match color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        Some(&bad) => Err(out_of_range(field, 0.0, 1.0, bad)),
        None => Ok(()),
    }
}

fn out_of_range(field: &str, min: f32, max: f32, value: f32) -> EmberError {
    EmberError::ValueOutOfRange {
        field: field.to_string(),
        min: min as f64,
        max: max as f64,
        value: value as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(config.simulation.settings(), SimulationSettings::default());
        assert!(config.simulation.seed.is_none());
        assert!(config.emitters.is_empty());
        assert!(config.effects.is_empty());
    }

    #[test]
    fn parse_scene() {
        let source = r#"
[simulation]
max_lifetime = 2.5
seed = 11

[[emitters]]
kind = "directional"
position = [0.1, -0.2]
direction = 1.5
width = 0.25

[[emitters]]
kind = "spinner"

[[effects]]
kind = "wind"
position = [0.5, 0.5]
force = 0.2
"#;
        let config = SceneConfig::from_toml_str(source).unwrap();
        assert!((config.simulation.max_lifetime - 2.5).abs() < 1e-6);
        assert_eq!(config.simulation.falloff, DEFAULT_FALLOFF);
        assert_eq!(config.simulation.seed, Some(11));
        assert_eq!(config.emitters.len(), 2);
        assert_eq!(config.emitters[1].kind, EmitterType::Spinner);

        let emitter = config.emitters[0].to_emitter();
        assert_eq!(emitter.direction_width(), Some(Vec2::new(1.5, 0.25)));
        assert_eq!(emitter.position, Vec2::new(0.1, -0.2));

        let effect = config.effects[0].to_effect();
        assert_eq!(effect.kind, EffectKind::Wind);
        assert!((effect.force - 0.2).abs() < 1e-6);
    }

    #[test]
    fn toml_integer_float_coercion() {
        let source = "[[effects]]\nposition = [1, 0]\nforce = 1\n";
        let config = SceneConfig::from_toml_str(source).unwrap();
        assert_eq!(config.effects[0].position, [1.0, 0.0]);
        assert_eq!(config.effects[0].force, 1.0);
    }

    #[test]
    fn rejects_non_positive_lifetime() {
        let err = SceneConfig::from_toml_str("[simulation]\nmax_lifetime = 0.0\n").unwrap_err();
        assert!(matches!(err, EmberError::ValueOutOfRange { ref field, .. } if field == "simulation.max_lifetime"));
    }

    #[test]
    fn rejects_bad_color() {
        let source = "[[emitters]]\ncolor = [1.0, 2.0, 0.0, 1.0]\n";
        let err = SceneConfig::from_toml_str(source).unwrap_err();
        assert!(err.to_string().contains("emitters[0].color"));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = SceneConfig::from_toml_str("[[effects]]\nkind = \"vortex\"\n").unwrap_err();
        assert!(matches!(err, EmberError::TomlParse(_)));
    }

    #[test]
    fn template_survives_a_round_trip() {
        let template = SceneConfig::template();
        let text = template.to_toml_string().unwrap();
        let parsed = SceneConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, template);
    }

    #[test]
    fn build_scene_uses_config() {
        let scene = SceneConfig::template().build_scene(None);
        assert_eq!(scene.emitters().len(), 2);
        assert_eq!(scene.effects().len(), 2);
        assert_eq!(scene.seed(), 7);

        let scene = SceneConfig::template().build_scene(Some(99));
        assert_eq!(scene.seed(), 99);
    }

    #[test]
    fn snapshot_matches_scene() {
        let mut scene = ParticleScene::with_seed(SimulationSettings::default(), 1);
        let mut emitter = Emitter::directional();
        emitter.set_direction_width(Vec2::new(0.5, 0.1));
        scene.add_emitter(emitter);
        scene.add_effect(Effect::wind());

        let config = SceneConfig::from_scene(&scene);
        assert_eq!(config.emitters[0].to_emitter(), emitter);
        assert_eq!(config.effects[0].to_effect(), Effect::wind());
    }

    #[test]
    fn load_and_save_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");

        SceneConfig::template().save_new(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        assert_eq!(loaded, SceneConfig::template());

        let err = SceneConfig::template().save_new(&path).unwrap_err();
        assert!(matches!(err, EmberError::Validation(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, EmberError::Io(_)));
    }
}
