//! Instance records for the flyer and rocks

use bytemuck::{Pod, Zeroable};

use crate::sim::{FlyerPose, Obstacle, Snapshot};

/// One rock, as uploaded to an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ObstacleInstance {
    pub position: [f32; 3],
    /// Uniform mesh scale (rock size)
    pub scale: f32,
    pub rotation: [f32; 3],
    pub bounding_radius: f32,
}

impl From<&Obstacle> for ObstacleInstance {
    fn from(rock: &Obstacle) -> Self {
        Self {
            position: rock.position.to_array(),
            scale: rock.size,
            rotation: rock.rotation.to_array(),
            bounding_radius: rock.bounding_radius,
        }
    }
}

/// The flyer, as uploaded to a uniform or instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FlyerInstance {
    pub position: [f32; 3],
    /// Roll around the forward axis
    pub tilt: f32,
    /// Flap rotation applied to both wings
    pub wing_angle: f32,
    pub bounding_radius: f32,
    pub _pad: [f32; 2],
}

impl From<&FlyerPose> for FlyerInstance {
    fn from(pose: &FlyerPose) -> Self {
        Self {
            position: pose.position.to_array(),
            tilt: pose.tilt,
            wing_angle: pose.wing_angle,
            bounding_radius: pose.bounding_radius,
            _pad: [0.0; 2],
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInstances {
    pub flyer: FlyerInstance,
    /// Same order as `Snapshot::obstacles`
    pub obstacles: Vec<ObstacleInstance>,
    /// Show the game-over banner
    pub game_over: bool,
    pub score: u64,
}

impl Default for FlyerInstance {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FrameInstances {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            flyer: FlyerInstance::from(&snapshot.flyer),
            obstacles: snapshot.obstacles.iter().map(ObstacleInstance::from).collect(),
            game_over: snapshot.phase == crate::sim::GamePhase::GameOver,
            score: snapshot.score,
        }
    }

    /// Raw bytes of the rock instance buffer
    pub fn obstacle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.obstacles)
    }

    pub fn flyer_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.flyer)
    }
}

/// Colors for game elements
pub mod colors {
    /// Sky blue (0x87CEEB)
    pub const SKY: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    /// Rock gray (0x808080)
    pub const ROCK: [f32; 4] = [0.502, 0.502, 0.502, 1.0];
    /// Pterodactyl brown-gray (0x8B7765)
    pub const FLYER: [f32; 4] = [0.545, 0.467, 0.396, 1.0];
    pub const FLYER_WING: [f32; 4] = [0.545, 0.467, 0.396, 0.9];
}
