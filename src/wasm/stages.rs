//! One renderer per demo. Each owns its GPU resources and a [`FrameLoop`]
//! over the host-side scene state, and draws that state every frame.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec2, Vec3, Vec4};
use web_sys::{WebGl2RenderingContext as GL, WebGlTexture};

use super::mesh::GpuMesh;
use super::program::Program;
use super::shaders;
use super::texture::{load_texture, Wrap};
use crate::config::{DemoConfig, DemoKind};
use crate::error::Result;
use crate::frame::FrameLoop;
use crate::geometry;
use crate::scene::pillar::PILLAR_TEXTURE_REPEAT;
use crate::scene::{CubeSpin, GlobeSpin, Pillar, SavePointScene, ShapeRing};

/// Light blue used by every save-point effect (0x007eff).
const GLOW: Vec4 = Vec4::new(0.0, 126.0 / 255.0, 1.0, 1.0);
const PILLAR_OPACITY: f32 = 0.5;

const TEXTURED_UNIFORMS: [&str; 7] = [
    "uProjectionMatrix",
    "uModelViewMatrix",
    "uSampler",
    "uTexRepeat",
    "uTexOffset",
    "uColor",
    "uOpacity",
];

const LIT_UNIFORMS: [&str; 6] = [
    "uProjectionMatrix",
    "uModelViewMatrix",
    "uNormalMatrix",
    "uColor",
    "uAmbient",
    "uLightDirection",
];

pub trait Stage {
    /// Advance the animation to `now_ms` and draw into a `width`x`height` viewport.
    fn frame(&mut self, gl: &GL, now_ms: f64, width: i32, height: i32);
}

pub fn build(gl: &GL, config: &DemoConfig) -> Result<Box<dyn Stage>> {
    let stage: Box<dyn Stage> = match config.demo {
        DemoKind::Cube => Box::new(CubeStage::colored(gl)?),
        DemoKind::TexturedCube => Box::new(CubeStage::textured(gl, &config.texture_url)?),
        DemoKind::Globe => Box::new(GlobeStage::new(gl)?),
        DemoKind::Shapes => Box::new(ShapesStage::new(gl)?),
        DemoKind::SavePoint => Box::new(SavePointStage::new(gl, config.seed)?),
    };
    log::info!("demo '{}' ready", config.demo);
    Ok(stage)
}

fn begin_frame(gl: &GL, width: i32, height: i32) -> f32 {
    gl.viewport(0, 0, width, height);
    gl.clear_color(0.0, 0.0, 0.0, 1.0);
    gl.clear_depth(1.0);
    gl.enable(GL::DEPTH_TEST);
    gl.depth_func(GL::LEQUAL);
    gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    width.max(1) as f32 / height.max(1) as f32
}

fn bind_texture(gl: &GL, program: &Program, texture: &WebGlTexture) {
    gl.active_texture(GL::TEXTURE0);
    gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    program.set_i32(gl, "uSampler", 0);
}

/// Sets the per-draw uniforms of the textured program.
fn set_surface(gl: &GL, program: &Program, repeat: Vec2, offset: Vec2, color: Vec4, opacity: f32) {
    program.set_vec2(gl, "uTexRepeat", repeat);
    program.set_vec2(gl, "uTexOffset", offset);
    program.set_vec4(gl, "uColor", color);
    program.set_f32(gl, "uOpacity", opacity);
}

struct CubeStage {
    frames: FrameLoop<CubeSpin>,
    program: Program,
    mesh: GpuMesh,
    texture: Option<WebGlTexture>,
}

impl CubeStage {
    fn colored(gl: &GL) -> Result<Self> {
        let program = Program::new(
            gl,
            shaders::COLOR_VS,
            shaders::COLOR_FS,
            &["uProjectionMatrix", "uModelViewMatrix"],
        )?;
        let mesh = GpuMesh::upload_with_colors(gl, &geometry::cube(), Some(&geometry::cube_colors()))?;
        Ok(Self {
            frames: FrameLoop::new(CubeSpin::default()),
            program,
            mesh,
            texture: None,
        })
    }

    fn textured(gl: &GL, url: &str) -> Result<Self> {
        let program = Program::new(gl, shaders::TEXTURE_VS, shaders::TEXTURE_FS, &TEXTURED_UNIFORMS)?;
        let mesh = GpuMesh::upload(gl, &geometry::cube())?;
        let texture = load_texture(gl, url, Wrap::Clamp)?;
        Ok(Self {
            frames: FrameLoop::new(CubeSpin::default()),
            program,
            mesh,
            texture: Some(texture),
        })
    }
}

impl Stage for CubeStage {
    fn frame(&mut self, gl: &GL, now_ms: f64, width: i32, height: i32) {
        self.frames.frame(now_ms);
        let aspect = begin_frame(gl, width, height);

        let projection = Mat4::perspective_rh_gl(45f32.to_radians(), aspect, 0.1, 100.0);
        self.program.bind(gl);
        self.program.set_mat4(gl, "uProjectionMatrix", &projection);
        self.program
            .set_mat4(gl, "uModelViewMatrix", &self.frames.scene().model_view());

        if let Some(texture) = &self.texture {
            bind_texture(gl, &self.program, texture);
            set_surface(gl, &self.program, Vec2::ONE, Vec2::ZERO, Vec4::ONE, 1.0);
        }

        self.mesh.draw(gl);
    }
}

/// Camera and lights shared by the globe and shape-ring demos.
struct LitView {
    program: Program,
    view: Mat4,
    ambient: Vec3,
}

impl LitView {
    fn new(gl: &GL, eye: Vec3, ambient: Vec3) -> Result<Self> {
        Ok(Self {
            program: Program::new(gl, shaders::LIT_VS, shaders::LIT_FS, &LIT_UNIFORMS)?,
            view: Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y),
            ambient,
        })
    }

    fn begin(&self, gl: &GL, aspect: f32, color: Vec3) {
        let projection = Mat4::perspective_rh_gl(45f32.to_radians(), aspect, 1.0, 10_000.0);
        // directional light from (1, 1, 1), expressed in view space
        let light = self.view.transform_vector3(Vec3::ONE);

        self.program.bind(gl);
        self.program.set_mat4(gl, "uProjectionMatrix", &projection);
        self.program.set_vec3(gl, "uLightDirection", light);
        self.program.set_vec3(gl, "uAmbient", self.ambient);
        self.program.set_vec3(gl, "uColor", color);
    }

    fn draw(&self, gl: &GL, mesh: &GpuMesh, model: Mat4) {
        let model_view = self.view * model;
        self.program.set_mat4(gl, "uModelViewMatrix", &model_view);
        self.program
            .set_mat4(gl, "uNormalMatrix", &model_view.inverse().transpose());
        mesh.draw(gl);
    }
}

struct GlobeStage {
    frames: FrameLoop<GlobeSpin>,
    lit: LitView,
    sphere: GpuMesh,
}

impl GlobeStage {
    fn new(gl: &GL) -> Result<Self> {
        Ok(Self {
            frames: FrameLoop::new(GlobeSpin::default()),
            lit: LitView::new(gl, Vec3::new(0.0, 0.0, 1000.0), Vec3::ZERO)?,
            sphere: GpuMesh::upload(gl, &geometry::sphere(300.0, 30, 30))?,
        })
    }
}

impl Stage for GlobeStage {
    fn frame(&mut self, gl: &GL, now_ms: f64, width: i32, height: i32) {
        self.frames.frame(now_ms);
        let aspect = begin_frame(gl, width, height);
        self.lit.begin(gl, aspect, Vec3::X);
        self.lit.draw(gl, &self.sphere, self.frames.scene().model());
    }
}

struct ShapesStage {
    frames: FrameLoop<ShapeRing>,
    lit: LitView,
    shapes: Vec<GpuMesh>,
}

impl ShapesStage {
    fn new(gl: &GL) -> Result<Self> {
        let meshes = [
            geometry::sphere(50.0, 32, 16),
            geometry::cuboid(100.0, 100.0, 100.0),
            geometry::plane(100.0, 100.0, 1, 1),
            geometry::tetrahedron(100.0),
            geometry::cone(100.0, 100.0, 32),
            geometry::cylinder(50.0, 50.0, 100.0, 32, 1, false),
            geometry::torus(50.0, 30.0, 16, 100),
        ];
        let shapes = meshes
            .iter()
            .map(|mesh| GpuMesh::upload(gl, mesh))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            frames: FrameLoop::new(ShapeRing::new(shapes.len())),
            // 0x999999 ambient
            lit: LitView::new(gl, Vec3::new(0.0, 500.0, 1000.0), Vec3::splat(0.6))?,
            shapes,
        })
    }
}

impl Stage for ShapesStage {
    fn frame(&mut self, gl: &GL, now_ms: f64, width: i32, height: i32) {
        self.frames.frame(now_ms);
        let aspect = begin_frame(gl, width, height);
        // planes are visible from behind
        gl.disable(GL::CULL_FACE);

        self.lit.begin(gl, aspect, Vec3::X);
        let ring = self.frames.scene();
        for (index, mesh) in self.shapes.iter().enumerate() {
            self.lit.draw(gl, mesh, ring.model(index));
        }
    }
}

struct SavePointTextures {
    tile: WebGlTexture,
    pillar: WebGlTexture,
    swirl: WebGlTexture,
    ground: WebGlTexture,
    particle: WebGlTexture,
}

struct SavePointStage {
    frames: FrameLoop<SavePointScene>,
    program: Program,
    textures: SavePointTextures,
    floor: GpuMesh,
    pillars: [GpuMesh; 2],
    swirl: GpuMesh,
    ground: GpuMesh,
    sprite: GpuMesh,
}

fn pillar_mesh(gl: &GL, pillar: &Pillar) -> Result<GpuMesh> {
    let mesh = geometry::cylinder(pillar.top_radius(), pillar.bottom_radius(), pillar.height(), 20, 1, true);
    GpuMesh::upload(gl, &mesh)
}

impl SavePointStage {
    fn new(gl: &GL, seed: Option<u64>) -> Result<Self> {
        let scene = SavePointScene::new(seed);
        let [inner, outer] = scene.save_point().pillars();
        let pillars = [pillar_mesh(gl, inner)?, pillar_mesh(gl, outer)?];

        let textures = SavePointTextures {
            tile: load_texture(gl, "img/tile.png", Wrap::Repeat)?,
            pillar: load_texture(gl, "img/pillar.png", Wrap::Repeat)?,
            swirl: load_texture(gl, "img/swirl.png", Wrap::Repeat)?,
            ground: load_texture(gl, "img/ground.png", Wrap::Clamp)?,
            particle: load_texture(gl, "img/particle_2.png", Wrap::Clamp)?,
        };

        Ok(Self {
            frames: FrameLoop::new(scene),
            program: Program::new(gl, shaders::TEXTURE_VS, shaders::TEXTURE_FS, &TEXTURED_UNIFORMS)?,
            textures,
            floor: GpuMesh::upload(gl, &geometry::plane(100.0, 100.0, 1, 1))?,
            pillars,
            swirl: GpuMesh::upload(gl, &geometry::torus(6.0, 3.0, 2, 100))?,
            ground: GpuMesh::upload(gl, &geometry::plane(10.0, 10.0, 32, 32))?,
            sprite: GpuMesh::upload(gl, &geometry::sprite_quad())?,
        })
    }

    fn draw_mesh(&self, gl: &GL, mesh: &GpuMesh, view: &Mat4, model: Mat4) {
        self.program.set_mat4(gl, "uModelViewMatrix", &(*view * model));
        mesh.draw(gl);
    }
}

impl Stage for SavePointStage {
    fn frame(&mut self, gl: &GL, now_ms: f64, width: i32, height: i32) {
        self.frames.frame(now_ms);
        let aspect = begin_frame(gl, width, height);
        gl.disable(GL::CULL_FACE);

        let scene = self.frames.scene();
        let camera = scene.camera();
        let view = camera.view_matrix();
        let flat = Mat4::from_rotation_x(FRAC_PI_2);

        let program = &self.program;
        program.bind(gl);
        program.set_mat4(gl, "uProjectionMatrix", &camera.projection(aspect));

        // opaque floor, dimmed to roughly what the grey point light gives
        gl.disable(GL::BLEND);
        gl.depth_mask(true);
        bind_texture(gl, program, &self.textures.tile);
        set_surface(gl, program, Vec2::splat(16.0), Vec2::ZERO, Vec4::new(0.67, 0.67, 0.67, 1.0), 1.0);
        self.draw_mesh(gl, &self.floor, &view, flat);

        // glowing parts: additive, no depth writes
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE);
        gl.depth_mask(false);

        let save_point = scene.save_point();

        bind_texture(gl, program, &self.textures.ground);
        set_surface(gl, program, Vec2::ONE, Vec2::ZERO, Vec4::ONE, 1.0);
        let ground = Mat4::from_translation(Vec3::new(0.0, 0.02, 0.0)) * flat * Mat4::from_scale(Vec3::splat(1.35));
        self.draw_mesh(gl, &self.ground, &view, ground);

        bind_texture(gl, program, &self.textures.swirl);
        set_surface(gl, program, Vec2::ONE, save_point.swirl().texture_offset(), GLOW, 1.0);
        let swirl = Mat4::from_translation(Vec3::new(0.0, 0.01, 0.0)) * flat;
        self.draw_mesh(gl, &self.swirl, &view, swirl);

        bind_texture(gl, program, &self.textures.pillar);
        for (pillar, mesh) in save_point.pillars().into_iter().zip(&self.pillars) {
            set_surface(gl, program, PILLAR_TEXTURE_REPEAT, pillar.texture_offset(), GLOW, PILLAR_OPACITY);
            let model = Mat4::from_translation(Vec3::new(0.0, pillar.base_lift(), 0.0));
            self.draw_mesh(gl, mesh, &view, model);
        }

        // camera-facing sprites: translate in view space, then scale only
        bind_texture(gl, program, &self.textures.particle);
        for particle in save_point.emitter().particles() {
            set_surface(gl, program, Vec2::ONE, Vec2::ZERO, GLOW, particle.opacity());
            let centre = view.transform_point3(particle.position());
            let model_view = Mat4::from_translation(centre) * Mat4::from_scale(Vec3::splat(particle.scale()));
            program.set_mat4(gl, "uModelViewMatrix", &model_view);
            self.sprite.draw(gl);
        }

        gl.depth_mask(true);
        gl.disable(GL::BLEND);
    }
}
