use js_sys::{Float32Array, Uint32Array};
use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer, WebGlVertexArrayObject};

use super::program::attrib;
use crate::error::{DemoError, Result};
use crate::geometry::Mesh;

/// A mesh uploaded to the GPU: one vertex array object with static buffers.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    // kept alive for the lifetime of the VAO
    _buffers: Vec<WebGlBuffer>,
    index_count: i32,
}

impl GpuMesh {
    pub fn upload(gl: &GL, mesh: &Mesh) -> Result<Self> {
        Self::upload_with_colors(gl, mesh, None)
    }

    /// `colors` holds RGBA per vertex for the vertex-color program.
    pub fn upload_with_colors(gl: &GL, mesh: &Mesh, colors: Option<&[f32]>) -> Result<Self> {
        let vao = gl
            .create_vertex_array()
            .ok_or(DemoError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let mut buffers = vec![
            float_attribute(gl, attrib::POSITION, 3, &mesh.positions)?,
            float_attribute(gl, attrib::NORMAL, 3, &mesh.normals)?,
            float_attribute(gl, attrib::TEXCOORD, 2, &mesh.uvs)?,
        ];
        if let Some(colors) = colors {
            buffers.push(float_attribute(gl, attrib::COLOR, 4, colors)?);
        }

        let indices = gl
            .create_buffer()
            .ok_or(DemoError::Allocation("index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &Uint32Array::from(mesh.indices.as_slice()),
            GL::STATIC_DRAW,
        );
        buffers.push(indices);

        gl.bind_vertex_array(None);

        Ok(Self {
            vao,
            _buffers: buffers,
            index_count: mesh.index_count() as i32,
        })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_INT, 0);
        gl.bind_vertex_array(None);
    }
}

fn float_attribute(gl: &GL, location: u32, components: i32, data: &[f32]) -> Result<WebGlBuffer> {
    let buffer = gl
        .create_buffer()
        .ok_or(DemoError::Allocation("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &Float32Array::from(data), GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}
