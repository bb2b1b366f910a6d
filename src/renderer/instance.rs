//! Per-object instance records for the mesh renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Mesh a renderer should draw for an instance.
///
/// The discriminant doubles as the shader's object id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum MeshKind {
    Skybox = 0,
    Statue = 1,
    Ground = 2,
    Liberty = 3,
    Monster = 4,
    Rock = 5,
    FlyingMonster = 6,
    Spaceship = 7,
    Mount = 8,
    Projectile = 9,
    Hitbox = 10,
    Piece = 11,
    Tree = 12,
    Boss = 13,
    Capsule = 18,
}

/// One drawable object, laid out for direct upload to an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub translation: [f32; 3],
    /// Rotation about +Y in radians
    pub yaw: f32,
    pub scale: [f32; 3],
    /// `MeshKind` discriminant
    pub mesh: u32,
    pub tint: [f32; 4],
}

impl Instance {
    pub fn new(mesh: MeshKind, translation: Vec3, scale: Vec3, yaw: f32) -> Self {
        Self {
            translation: translation.to_array(),
            yaw,
            scale: scale.to_array(),
            mesh: mesh as u32,
            tint: colors::OPAQUE,
        }
    }

    pub fn uniform(mesh: MeshKind, translation: Vec3, scale: f32) -> Self {
        Self::new(mesh, translation, Vec3::splat(scale), 0.0)
    }

    /// Translucent debug sphere of the given radius
    pub fn hitbox(center: Vec3, radius: f32) -> Self {
        Self {
            tint: colors::HITBOX,
            ..Self::uniform(MeshKind::Hitbox, center, radius)
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn kind(&self) -> Option<MeshKind> {
        MeshKind::ALL.into_iter().find(|k| *k as u32 == self.mesh)
    }
}

impl MeshKind {
    pub const ALL: [MeshKind; 15] = [
        MeshKind::Skybox,
        MeshKind::Statue,
        MeshKind::Ground,
        MeshKind::Liberty,
        MeshKind::Monster,
        MeshKind::Rock,
        MeshKind::FlyingMonster,
        MeshKind::Spaceship,
        MeshKind::Mount,
        MeshKind::Projectile,
        MeshKind::Hitbox,
        MeshKind::Piece,
        MeshKind::Tree,
        MeshKind::Boss,
        MeshKind::Capsule,
    ];
}

/// Tints multiplied into the mesh texture
pub mod colors {
    pub const OPAQUE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HITBOX: [f32; 4] = [1.0, 0.2, 0.2, 0.35];
}
