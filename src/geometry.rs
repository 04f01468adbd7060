//! Flat vertex/index arrays for the meshes the demos draw. Layouts follow the
//! usual scene-graph primitives so the shapes come out the same size and
//! orientation.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Interleaving-free mesh data, ready for `bufferData`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// xyz per vertex
    pub positions: Vec<f32>,
    /// xyz per vertex, unit length
    pub normals: Vec<f32>,
    /// uv per vertex
    pub uvs: Vec<f32>,
    /// WebGL2 draws `UNSIGNED_INT` indices natively, so large grids don't wrap.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
        self.uvs.extend_from_slice(&uv);
        index
    }

    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

/// Per-face colors of the vertex-color cube: white, red, green, blue, yellow, purple.
pub const CUBE_FACE_COLORS: [[f32; 4]; 6] = [
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

// front, back, top, bottom, right, left; four corners each
const CUBE_FACES: [([[f32; 3]; 4], [f32; 3]); 6] = [
    ([[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]], [0.0, 0.0, 1.0]),
    ([[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]], [0.0, 0.0, -1.0]),
    ([[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]], [0.0, 1.0, 0.0]),
    ([[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]], [0.0, -1.0, 0.0]),
    ([[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]], [1.0, 0.0, 0.0]),
    ([[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]], [-1.0, 0.0, 0.0]),
];

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// 2x2x2 cube centred on the origin: 24 vertices, 36 indices.
pub fn cube() -> Mesh {
    let mut mesh = Mesh::default();
    for (corners, normal) in CUBE_FACES {
        let normal = Vec3::from(normal);
        let first = mesh.vertex_count() as u32;
        for (corner, uv) in corners.iter().zip(FACE_UVS) {
            mesh.push_vertex(Vec3::from(*corner), normal, uv);
        }
        mesh.indices
            .extend_from_slice(&[first, first + 1, first + 2, first, first + 2, first + 3]);
    }
    mesh
}

/// RGBA per vertex for [`cube`], one color per face.
pub fn cube_colors() -> Vec<f32> {
    CUBE_FACE_COLORS
        .iter()
        .flat_map(|color| std::iter::repeat(color).take(4).flatten().copied())
        .collect()
}

/// Axis-aligned box with the given edge lengths.
pub fn cuboid(width: f32, height: f32, depth: f32) -> Mesh {
    let mut mesh = cube();
    let half = Vec3::new(width, height, depth) * 0.5;
    for p in mesh.positions.chunks_exact_mut(3) {
        p[0] *= half.x;
        p[1] *= half.y;
        p[2] *= half.z;
    }
    mesh
}

/// Plane in XY facing +Z.
pub fn plane(width: f32, height: f32, width_segments: u16, height_segments: u16) -> Mesh {
    let gx = u32::from(width_segments.max(1));
    let gy = u32::from(height_segments.max(1));
    let seg_w = width / gx as f32;
    let seg_h = height / gy as f32;

    let mut mesh = Mesh::default();
    for iy in 0..=gy {
        let y = iy as f32 * seg_h - height / 2.0;
        for ix in 0..=gx {
            let x = ix as f32 * seg_w - width / 2.0;
            mesh.push_vertex(
                Vec3::new(x, -y, 0.0),
                Vec3::Z,
                [ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32],
            );
        }
    }

    let row = gx + 1;
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            mesh.push_quad(a, b, c, d);
        }
    }
    mesh
}

/// UV sphere; pole rows emit a single triangle per segment.
pub fn sphere(radius: f32, width_segments: u16, height_segments: u16) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);

    let mut mesh = Mesh::default();
    let mut grid = Vec::with_capacity(hs as usize + 1);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let mut row = Vec::with_capacity(ws as usize + 1);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            row.push(mesh.push_vertex(dir * radius, dir.normalize_or_zero(), [u, 1.0 - v]));
        }
        grid.push(row);
    }

    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs as usize - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Cylinder (or frustum) along Y, centred on the origin. `open_ended` skips the caps.
pub fn cylinder(
    top_radius: f32,
    bottom_radius: f32,
    height: f32,
    radial_segments: u16,
    height_segments: u16,
    open_ended: bool,
) -> Mesh {
    let radial = radial_segments.max(3);
    let rows = height_segments.max(1);
    let half = height / 2.0;
    let slope = (bottom_radius - top_radius) / height;

    let mut mesh = Mesh::default();
    let mut grid = Vec::with_capacity(rows as usize + 1);
    for y in 0..=rows {
        let v = y as f32 / rows as f32;
        let radius = v * (bottom_radius - top_radius) + top_radius;
        let mut row = Vec::with_capacity(radial as usize + 1);
        for x in 0..=radial {
            let u = x as f32 / radial as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let position = Vec3::new(radius * sin, -v * height + half, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            row.push(mesh.push_vertex(position, normal, [u, 1.0 - v]));
        }
        grid.push(row);
    }

    for y in 0..rows as usize {
        for x in 0..radial as usize {
            mesh.push_quad(grid[y][x], grid[y + 1][x], grid[y + 1][x + 1], grid[y][x + 1]);
        }
    }

    if !open_ended {
        if top_radius > 0.0 {
            push_cap(&mut mesh, top_radius, half, radial, true);
        }
        if bottom_radius > 0.0 {
            push_cap(&mut mesh, bottom_radius, -half, radial, false);
        }
    }
    mesh
}

fn push_cap(mesh: &mut Mesh, radius: f32, y: f32, radial: u16, top: bool) {
    let radial = u32::from(radial);
    let (normal, flip) = if top { (Vec3::Y, 1.0) } else { (Vec3::NEG_Y, -1.0) };
    let centre = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal, [0.5, 0.5]);
    let first = mesh.vertex_count() as u32;
    for x in 0..=radial {
        let (sin, cos) = (x as f32 / radial as f32 * TAU).sin_cos();
        mesh.push_vertex(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            [sin * 0.5 + 0.5, cos * 0.5 * flip + 0.5],
        );
    }
    for x in 0..radial {
        let (i, j) = (first + x, first + x + 1);
        if top {
            mesh.indices.extend_from_slice(&[centre, i, j]);
        } else {
            mesh.indices.extend_from_slice(&[centre, j, i]);
        }
    }
}

/// Closed cone with its apex up.
pub fn cone(radius: f32, height: f32, radial_segments: u16) -> Mesh {
    cylinder(0.0, radius, height, radial_segments, 1, false)
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u16, tubular_segments: u16) -> Mesh {
    let radial = u32::from(radial_segments.max(2));
    let tubular = u32::from(tubular_segments.max(3));

    let mut mesh = Mesh::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let centre = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push_vertex(
                position,
                (position - centre).normalize_or_zero(),
                [i as f32 / tubular as f32, j as f32 / radial as f32],
            );
        }
    }

    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_quad(a, b, c, d);
        }
    }
    mesh
}

/// Regular tetrahedron inscribed in a sphere of `radius`, flat shaded.
pub fn tetrahedron(radius: f32) -> Mesh {
    let corners = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|c| c.normalize() * radius);
    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

    let mut mesh = Mesh::default();
    for face in faces {
        let [a, b, c] = face.map(|i| corners[i]);
        let normal = (b - a).cross(c - a).normalize();
        for (p, uv) in [a, b, c].into_iter().zip([[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]]) {
            let index = mesh.push_vertex(p, normal, uv);
            mesh.indices.push(index);
        }
    }
    mesh
}

/// Unit quad in XY centred on the origin, used for camera-facing sprites.
pub fn sprite_quad() -> Mesh {
    plane(1.0, 1.0, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(name: &str, mesh: &Mesh) {
        let n = mesh.vertex_count();
        assert!(n > 0, "{name}: no vertices");
        assert_eq!(mesh.normals.len(), n * 3, "{name}: normals");
        assert_eq!(mesh.uvs.len(), n * 2, "{name}: uvs");
        assert_eq!(mesh.index_count() % 3, 0, "{name}: partial triangle");
        assert!(
            mesh.indices.iter().all(|&i| (i as usize) < n),
            "{name}: index out of range"
        );
        for normal in mesh.normals.chunks_exact(3) {
            let len = Vec3::new(normal[0], normal[1], normal[2]).length();
            assert!((len - 1.0).abs() < 1e-4, "{name}: normal length {len}");
        }
    }

    #[test]
    fn all_primitives_are_well_formed() {
        let meshes = [
            ("cube", cube()),
            ("cuboid", cuboid(100.0, 100.0, 100.0)),
            ("plane", plane(100.0, 100.0, 32, 32)),
            ("sphere", sphere(300.0, 30, 30)),
            ("pillar", cylinder(3.0, 3.0, 10.0, 20, 1, true)),
            ("cylinder", cylinder(50.0, 50.0, 100.0, 32, 1, false)),
            ("cone", cone(100.0, 100.0, 32)),
            ("torus", torus(6.0, 3.0, 2, 100)),
            ("tetrahedron", tetrahedron(100.0)),
            ("sprite", sprite_quad()),
        ];
        for (name, mesh) in &meshes {
            assert_well_formed(name, mesh);
        }
    }

    #[test]
    fn cube_layout() {
        let mesh = cube();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(cube_colors().len(), 24 * 4);
        // back face is red
        assert_eq!(&cube_colors()[16..20], &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn sphere_vertices_on_radius() {
        let mesh = sphere(300.0, 30, 30);
        assert_eq!(mesh.vertex_count(), 31 * 31);
        // two pole rows lose one triangle per segment
        assert_eq!(mesh.index_count(), 30 * 30 * 6 - 2 * 30 * 3);
        for p in mesh.positions.chunks_exact(3) {
            let r = Vec3::new(p[0], p[1], p[2]).length();
            assert!((r - 300.0).abs() < 1e-2);
        }
    }

    #[test]
    fn plane_spans_its_size() {
        let mesh = plane(10.0, 4.0, 2, 2);
        let xs: Vec<f32> = mesh.positions.chunks_exact(3).map(|p| p[0]).collect();
        let ys: Vec<f32> = mesh.positions.chunks_exact(3).map(|p| p[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -5.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 5.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 2.0);
        assert_eq!(mesh.index_count(), 2 * 2 * 6);
    }

    #[test]
    fn open_pillar_has_no_caps() {
        let open = cylinder(3.0, 3.0, 10.0, 20, 1, true);
        let closed = cylinder(3.0, 3.0, 10.0, 20, 1, false);
        assert_eq!(open.index_count(), 20 * 6);
        assert_eq!(closed.index_count(), 20 * 6 + 2 * 20 * 3);
    }

    #[test]
    fn tetrahedron_faces_point_outwards() {
        let mesh = tetrahedron(1.0);
        for (p, n) in mesh.positions.chunks_exact(3).zip(mesh.normals.chunks_exact(3)) {
            let p = Vec3::new(p[0], p[1], p[2]);
            let n = Vec3::new(n[0], n[1], n[2]);
            assert!(p.dot(n) > 0.0);
        }
    }

    #[test]
    fn dense_meshes_index_past_sixteen_bits() {
        let globe = sphere(1.0, 300, 300);
        assert_eq!(globe.vertex_count(), 301 * 301);
        assert_eq!(globe.indices.iter().max().copied(), Some(301 * 301 - 1));
        assert_well_formed("dense sphere", &globe);

        let floor = plane(1.0, 1.0, 300, 300);
        assert_eq!(floor.index_count(), 300 * 300 * 6);
        assert_eq!(floor.indices.iter().max().copied(), Some(301 * 301 - 1));
        assert_well_formed("dense plane", &floor);
    }
}
