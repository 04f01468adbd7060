use std::collections::HashMap;

use glam::{Mat4, Vec2, Vec3, Vec4};
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::{DemoError, Result};

/// Fixed attribute slots shared by every program, so one vertex array
/// object works with any of them.
pub mod attrib {
    pub const POSITION: u32 = 0;
    pub const COLOR: u32 = 1;
    pub const TEXCOORD: u32 = 2;
    pub const NORMAL: u32 = 3;
}

const ATTRIBUTES: [(u32, &str); 4] = [
    (attrib::POSITION, "aVertexPosition"),
    (attrib::COLOR, "aVertexColor"),
    (attrib::TEXCOORD, "aTextureCoord"),
    (attrib::NORMAL, "aVertexNormal"),
];

/// A linked program plus the uniform locations it actually uses.
pub struct Program {
    program: WebGlProgram,
    uniforms: HashMap<&'static str, WebGlUniformLocation>,
}

impl Program {
    pub fn new(gl: &GL, vs_source: &str, fs_source: &str, uniforms: &[&'static str]) -> Result<Self> {
        let vertex = compile_shader(gl, GL::VERTEX_SHADER, vs_source)?;
        let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, fs_source)?;
        let program = link_program(gl, &vertex, &fragment)?;

        // lookups for names the compiler optimised away come back empty
        let uniforms = uniforms
            .iter()
            .filter_map(|&name| gl.get_uniform_location(&program, name).map(|loc| (name, loc)))
            .collect();

        Ok(Self { program, uniforms })
    }

    pub fn bind(&self, gl: &GL) {
        gl.use_program(Some(&self.program));
    }

    fn location(&self, name: &str) -> Option<&WebGlUniformLocation> {
        let loc = self.uniforms.get(name);
        if loc.is_none() {
            log::trace!("uniform {name} not active");
        }
        loc
    }

    pub fn set_mat4(&self, gl: &GL, name: &str, value: &Mat4) {
        gl.uniform_matrix4fv_with_f32_array(self.location(name), false, &value.to_cols_array());
    }

    pub fn set_vec2(&self, gl: &GL, name: &str, value: Vec2) {
        gl.uniform2f(self.location(name), value.x, value.y);
    }

    pub fn set_vec3(&self, gl: &GL, name: &str, value: Vec3) {
        gl.uniform3f(self.location(name), value.x, value.y, value.z);
    }

    pub fn set_vec4(&self, gl: &GL, name: &str, value: Vec4) {
        gl.uniform4f(self.location(name), value.x, value.y, value.z, value.w);
    }

    pub fn set_f32(&self, gl: &GL, name: &str, value: f32) {
        gl.uniform1f(self.location(name), value);
    }

    pub fn set_i32(&self, gl: &GL, name: &str, value: i32) {
        gl.uniform1i(self.location(name), value);
    }
}

/// Compiles one shader stage; the info log comes back in the error.
pub fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or(DemoError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }

    let info = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(DemoError::ShaderCompile(info))
}

pub fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or(DemoError::Allocation("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    for (index, name) in ATTRIBUTES {
        gl.bind_attrib_location(&program, index, name);
    }
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }

    let info = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(DemoError::ProgramLink(info))
}
