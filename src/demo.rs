use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StageError};
use crate::frame::FrameInfo;
use crate::page::Document;
use crate::scene::Scene;
use crate::scenes::{
    create_chaotic_pendulum_scene, create_linked_arms_scene, create_pair_motion_scene,
    create_projectile_scene, create_rotator_scene, ChaoticPendulumRig, LinkedArmsRig, PairMotionRig,
    ProjectileRig, RotatorRig,
};
use crate::surface::{RenderSurface, SurfaceOptions};

/// Which animation a container shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    /// Spinning cube (Newton's laws)
    Rotator,
    /// Two spheres oscillating in mirror image (conservation laws)
    PairMotion,
    /// Two-segment swinging chain (pendulum motion)
    LinkedArms,
    /// Simulated double pendulum
    ChaoticPendulum,
    /// Spinning ball under drag, Magnus and Coriolis forces
    Projectile,
}

impl DemoKind {
    /// Demos on the default page, in layout order
    pub const LECTURE: [DemoKind; 3] = [DemoKind::Rotator, DemoKind::PairMotion, DemoKind::LinkedArms];

    pub const ALL: [DemoKind; 5] = [
        DemoKind::Rotator,
        DemoKind::PairMotion,
        DemoKind::LinkedArms,
        DemoKind::ChaoticPendulum,
        DemoKind::Projectile,
    ];

    /// Id of the container element this demo binds to
    pub fn container_id(&self) -> &'static str {
        match self {
            DemoKind::Rotator => "newton-animation",
            DemoKind::PairMotion => "conservation-animation",
            DemoKind::LinkedArms => "pendulum-simulation",
            DemoKind::ChaoticPendulum => "double-pendulum-lab",
            DemoKind::Projectile => "projectile-challenge",
        }
    }

    /// Build the initial scene and the handles its update rule needs
    pub fn build(&self) -> (Scene, Rig) {
        match self {
            DemoKind::Rotator => {
                let (scene, rig) = create_rotator_scene();
                (scene, Rig::Rotator(rig))
            }
            DemoKind::PairMotion => {
                let (scene, rig) = create_pair_motion_scene();
                (scene, Rig::PairMotion(rig))
            }
            DemoKind::LinkedArms => {
                let (scene, rig) = create_linked_arms_scene();
                (scene, Rig::LinkedArms(rig))
            }
            DemoKind::ChaoticPendulum => {
                let (scene, rig) = create_chaotic_pendulum_scene();
                (scene, Rig::ChaoticPendulum(rig))
            }
            DemoKind::Projectile => {
                let (scene, rig) = create_projectile_scene();
                (scene, Rig::Projectile(rig))
            }
        }
    }
}

/// Per-variant update state
#[derive(Debug, Clone, PartialEq)]
pub enum Rig {
    Rotator(RotatorRig),
    PairMotion(PairMotionRig),
    LinkedArms(LinkedArmsRig),
    ChaoticPendulum(ChaoticPendulumRig),
    Projectile(ProjectileRig),
}

impl Rig {
    pub fn update(&mut self, scene: &mut Scene, frame: &FrameInfo) {
        match self {
            Rig::Rotator(rig) => rig.update(scene, frame),
            Rig::PairMotion(rig) => rig.update(scene, frame),
            Rig::LinkedArms(rig) => rig.update(scene, frame),
            Rig::ChaoticPendulum(rig) => rig.update(scene, frame),
            Rig::Projectile(rig) => rig.update(scene, frame),
        }
    }
}

/// One animated scene bound to its own surface
pub struct Demo {
    kind: DemoKind,
    surface: RenderSurface,
    scene: Scene,
    rig: Rig,
}

impl Demo {
    /// Bind `kind` to its container in `document`
    pub fn new(kind: DemoKind, document: &Document, options: SurfaceOptions) -> Result<Self> {
        let id = kind.container_id();
        let container = document
            .get_element_by_id(id)
            .ok_or_else(|| StageError::MissingContainer(id.to_string()))?;

        let surface = RenderSurface::new(container, options)?;
        let (scene, rig) = kind.build();

        log::info!("{:?} demo bound to `{}` ({} objects)", kind, id, scene.len());

        Ok(Self { kind, surface, scene, rig })
    }

    /// Mutate every transform for this frame, then redraw
    pub fn tick(&mut self, frame: &FrameInfo) {
        self.rig.update(&mut self.scene, frame);
        self.surface.render(&self.scene);
    }

    pub fn resize(&mut self) {
        self.surface.resize();
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }
}
